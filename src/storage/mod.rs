use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, teacher_id: i64, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 通过加入码获取班级信息
    async fn get_class_by_code(&self, join_code: &str) -> Result<Option<Class>>;
    // 列出班级
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 班级成员管理方法
    // 学生加入班级
    async fn join_class(&self, user_id: i64, class_id: i64) -> Result<ClassMember>;
    // 学生离开/被移出班级
    async fn leave_class(&self, user_id: i64, class_id: i64) -> Result<bool>;
    // 获取用户在班级中的成员关系
    async fn get_class_member_by_user_id_and_class_id(
        &self,
        user_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassMember>>;
    // 获取班级成员详情（带用户信息）
    async fn get_class_member_detail(
        &self,
        class_id: i64,
        user_id: i64,
    ) -> Result<Option<ClassMemberDetail>>;
    // 列出班级成员
    async fn list_class_members_with_pagination(
        &self,
        class_id: i64,
        query: ClassMemberQuery,
    ) -> Result<ClassMemberListResponse>;
    // 列出班级全部成员的用户ID
    async fn list_class_member_user_ids(&self, class_id: i64) -> Result<Vec<i64>>;
    // 列出用户所在的班级
    async fn list_user_classes_with_pagination(
        &self,
        user_id: i64,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;

    /// 考勤管理方法
    // 记录考勤，同一 (班级, 学生, 日期) 重复记录时覆盖旧记录
    async fn upsert_attendance(
        &self,
        class_id: i64,
        recorded_by: i64,
        record: RecordAttendanceRequest,
    ) -> Result<Attendance>;
    // 按日期列出班级考勤记录
    async fn list_attendance_by_date(
        &self,
        class_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>>;
    // 分页列出某个学生在班级中的考勤历史
    async fn list_student_attendance_with_pagination(
        &self,
        class_id: i64,
        student_id: i64,
        query: AttendanceHistoryQuery,
    ) -> Result<AttendanceHistoryResponse>;
    // 统计班级在日期区间内的考勤汇总
    async fn get_attendance_summary(
        &self,
        class_id: i64,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<AttendanceSummaryResponse>;

    /// 班级事件管理方法
    // 创建事件
    async fn create_event(
        &self,
        class_id: i64,
        created_by: i64,
        event: CreateEventRequest,
    ) -> Result<Event>;
    // 获取班级内指定事件
    async fn get_event_by_id(&self, class_id: i64, event_id: i64) -> Result<Option<Event>>;
    // 分页列出班级事件
    async fn list_events_with_pagination(
        &self,
        class_id: i64,
        query: EventListQuery,
    ) -> Result<EventListResponse>;
    // 更新事件
    async fn update_event(
        &self,
        class_id: i64,
        event_id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<Event>>;
    // 删除事件
    async fn delete_event(&self, class_id: i64, event_id: i64) -> Result<bool>;

    /// 提醒管理方法
    // 创建提醒
    async fn create_reminder(
        &self,
        user_id: i64,
        reminder: CreateReminderRequest,
    ) -> Result<Reminder>;
    // 获取用户的指定提醒
    async fn get_reminder_by_id(&self, user_id: i64, reminder_id: i64)
    -> Result<Option<Reminder>>;
    // 分页列出用户提醒
    async fn list_reminders_with_pagination(
        &self,
        user_id: i64,
        query: ReminderListQuery,
    ) -> Result<ReminderListResponse>;
    // 更新提醒
    async fn update_reminder(
        &self,
        user_id: i64,
        reminder_id: i64,
        update: UpdateReminderRequest,
    ) -> Result<Option<Reminder>>;
    // 删除提醒
    async fn delete_reminder(&self, user_id: i64, reminder_id: i64) -> Result<bool>;
    // 列出已到期且未通知的未完成提醒（定时任务使用）
    async fn list_due_reminders(&self, now: DateTime<Utc>, limit: u64) -> Result<Vec<Reminder>>;
    // 标记提醒已通知
    async fn mark_reminder_notified(&self, reminder_id: i64) -> Result<bool>;

    /// 通知管理方法
    // 创建通知
    async fn create_notification(
        &self,
        notification: CreateNotificationRequest,
    ) -> Result<Notification>;
    // 批量创建通知
    async fn create_notifications_batch(
        &self,
        notifications: Vec<CreateNotificationRequest>,
    ) -> Result<u64>;
    // 分页列出用户通知
    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse>;
    // 统计用户未读通知数量
    async fn count_unread_notifications(&self, user_id: i64) -> Result<u64>;
    // 标记通知已读
    async fn mark_notification_read(&self, user_id: i64, notification_id: i64) -> Result<bool>;
    // 标记用户全部通知已读
    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64>;
    // 删除通知
    async fn delete_notification(&self, user_id: i64, notification_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
