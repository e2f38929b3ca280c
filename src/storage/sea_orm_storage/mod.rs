//! SeaORM 存储后端
//!
//! 每个领域一个子模块，方法带 _impl 后缀，SQLite、PostgreSQL、MySQL 通吃，
//! 类型从连接 URL 推断。

mod attendance;
mod class_members;
mod classes;
mod events;
mod notifications;
mod reminders;
mod users;

use crate::config::AppConfig;
use crate::errors::{ClassTrackError, Result};
use crate::models::PaginationInfo;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait,
    Select,
};
use std::time::Duration;
use tracing::info;

/// 归一化分页参数，页码从 1 起，页大小限制在 1..=100
pub(crate) fn page_window(page: Option<i64>, size: Option<i64>) -> (u64, u64) {
    (
        page.unwrap_or(1).max(1) as u64,
        size.unwrap_or(10).clamp(1, 100) as u64,
    )
}

#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 执行分页查询，返回当前页数据和分页信息
    /// label 用于错误信息，如 "用户"、"班级"
    pub(crate) async fn fetch_page_with_info<E>(
        &self,
        select: Select<E>,
        page: u64,
        size: u64,
        label: &str,
    ) -> Result<(Vec<E::Model>, PaginationInfo)>
    where
        E: EntityTrait,
        E::Model: FromQueryResult + Send + Sync,
    {
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("统计{label}总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("计算{label}页数失败: {e}")))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询{label}列表失败: {e}")))?;

        Ok((
            rows,
            PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        ))
    }
}

impl SeaOrmStorage {
    /// 连接数据库并跑完迁移
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // SQLite 需要单独的 pragma 调优，其余类型走通用连接
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("迁移执行失败: {e}")))?;

        info!("SeaORM 就绪，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 连接，开 WAL 并调一组读写 pragma
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassTrackError::database_config(format!("SQLite 连接串无效: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassTrackError::database_connection(format!("SQLite 打开失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// PostgreSQL、MySQL 走 SeaORM 默认连接池
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassTrackError::database_connection(format!("数据库连接失败: {e}")))
    }

    /// 裸文件路径补成 sqlite URL，带 scheme 的原样透传
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassTrackError::database_config(format!(
                "无法识别的数据库 URL: {url}，支持 sqlite://、postgres://、mysql:// 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// trait 方法全部转发到各领域的 _impl
use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    attendance::{
        entities::Attendance,
        requests::{AttendanceHistoryQuery, RecordAttendanceRequest},
        responses::{AttendanceHistoryResponse, AttendanceSummaryResponse},
    },
    class_members::{
        entities::{ClassMember, ClassMemberDetail},
        requests::ClassMemberQuery,
        responses::ClassMemberListResponse,
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    events::{
        entities::Event,
        requests::{CreateEventRequest, EventListQuery, UpdateEventRequest},
        responses::EventListResponse,
    },
    notifications::{
        entities::Notification,
        requests::{CreateNotificationRequest, NotificationListQuery},
        responses::NotificationListResponse,
    },
    reminders::{
        entities::Reminder,
        requests::{CreateReminderRequest, ReminderListQuery, UpdateReminderRequest},
        responses::ReminderListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 班级模块
    async fn create_class(&self, teacher_id: i64, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(teacher_id, class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_class_by_code(&self, join_code: &str) -> Result<Option<Class>> {
        self.get_class_by_code_impl(join_code).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 班级成员模块
    async fn join_class(&self, user_id: i64, class_id: i64) -> Result<ClassMember> {
        self.join_class_impl(user_id, class_id).await
    }

    async fn leave_class(&self, user_id: i64, class_id: i64) -> Result<bool> {
        self.leave_class_impl(user_id, class_id).await
    }

    async fn get_class_member_by_user_id_and_class_id(
        &self,
        user_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassMember>> {
        self.get_class_member_by_user_id_and_class_id_impl(user_id, class_id)
            .await
    }

    async fn get_class_member_detail(
        &self,
        class_id: i64,
        user_id: i64,
    ) -> Result<Option<ClassMemberDetail>> {
        self.get_class_member_detail_impl(class_id, user_id).await
    }

    async fn list_class_members_with_pagination(
        &self,
        class_id: i64,
        query: ClassMemberQuery,
    ) -> Result<ClassMemberListResponse> {
        self.list_class_members_with_pagination_impl(class_id, query)
            .await
    }

    async fn list_class_member_user_ids(&self, class_id: i64) -> Result<Vec<i64>> {
        self.list_class_member_user_ids_impl(class_id).await
    }

    async fn list_user_classes_with_pagination(
        &self,
        user_id: i64,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_user_classes_with_pagination_impl(user_id, query)
            .await
    }

    // 考勤模块
    async fn upsert_attendance(
        &self,
        class_id: i64,
        recorded_by: i64,
        record: RecordAttendanceRequest,
    ) -> Result<Attendance> {
        self.upsert_attendance_impl(class_id, recorded_by, record)
            .await
    }

    async fn list_attendance_by_date(
        &self,
        class_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.list_attendance_by_date_impl(class_id, date).await
    }

    async fn list_student_attendance_with_pagination(
        &self,
        class_id: i64,
        student_id: i64,
        query: AttendanceHistoryQuery,
    ) -> Result<AttendanceHistoryResponse> {
        self.list_student_attendance_with_pagination_impl(class_id, student_id, query)
            .await
    }

    async fn get_attendance_summary(
        &self,
        class_id: i64,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<AttendanceSummaryResponse> {
        self.get_attendance_summary_impl(class_id, from, to).await
    }

    // 班级事件模块
    async fn create_event(
        &self,
        class_id: i64,
        created_by: i64,
        event: CreateEventRequest,
    ) -> Result<Event> {
        self.create_event_impl(class_id, created_by, event).await
    }

    async fn get_event_by_id(&self, class_id: i64, event_id: i64) -> Result<Option<Event>> {
        self.get_event_by_id_impl(class_id, event_id).await
    }

    async fn list_events_with_pagination(
        &self,
        class_id: i64,
        query: EventListQuery,
    ) -> Result<EventListResponse> {
        self.list_events_with_pagination_impl(class_id, query).await
    }

    async fn update_event(
        &self,
        class_id: i64,
        event_id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<Event>> {
        self.update_event_impl(class_id, event_id, update).await
    }

    async fn delete_event(&self, class_id: i64, event_id: i64) -> Result<bool> {
        self.delete_event_impl(class_id, event_id).await
    }

    // 提醒模块
    async fn create_reminder(
        &self,
        user_id: i64,
        reminder: CreateReminderRequest,
    ) -> Result<Reminder> {
        self.create_reminder_impl(user_id, reminder).await
    }

    async fn get_reminder_by_id(
        &self,
        user_id: i64,
        reminder_id: i64,
    ) -> Result<Option<Reminder>> {
        self.get_reminder_by_id_impl(user_id, reminder_id).await
    }

    async fn list_reminders_with_pagination(
        &self,
        user_id: i64,
        query: ReminderListQuery,
    ) -> Result<ReminderListResponse> {
        self.list_reminders_with_pagination_impl(user_id, query)
            .await
    }

    async fn update_reminder(
        &self,
        user_id: i64,
        reminder_id: i64,
        update: UpdateReminderRequest,
    ) -> Result<Option<Reminder>> {
        self.update_reminder_impl(user_id, reminder_id, update).await
    }

    async fn delete_reminder(&self, user_id: i64, reminder_id: i64) -> Result<bool> {
        self.delete_reminder_impl(user_id, reminder_id).await
    }

    async fn list_due_reminders(&self, now: DateTime<Utc>, limit: u64) -> Result<Vec<Reminder>> {
        self.list_due_reminders_impl(now, limit).await
    }

    async fn mark_reminder_notified(&self, reminder_id: i64) -> Result<bool> {
        self.mark_reminder_notified_impl(reminder_id).await
    }

    // 通知模块
    async fn create_notification(
        &self,
        notification: CreateNotificationRequest,
    ) -> Result<Notification> {
        self.create_notification_impl(notification).await
    }

    async fn create_notifications_batch(
        &self,
        notifications: Vec<CreateNotificationRequest>,
    ) -> Result<u64> {
        self.create_notifications_batch_impl(notifications).await
    }

    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_with_pagination_impl(user_id, query)
            .await
    }

    async fn count_unread_notifications(&self, user_id: i64) -> Result<u64> {
        self.count_unread_notifications_impl(user_id).await
    }

    async fn mark_notification_read(&self, user_id: i64, notification_id: i64) -> Result<bool> {
        self.mark_notification_read_impl(user_id, notification_id)
            .await
    }

    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64> {
        self.mark_all_notifications_read_impl(user_id).await
    }

    async fn delete_notification(&self, user_id: i64, notification_id: i64) -> Result<bool> {
        self.delete_notification_impl(user_id, notification_id).await
    }
}
