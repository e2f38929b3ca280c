//! 提醒到期扫描定时任务
//!
//! 以固定间隔轮询到期提醒，为每条命中的提醒生成通知并置位 notified。
//! 单次扫描的数量有上限，积压的提醒在后续节拍中逐步消化。

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::models::notifications::entities::Notification;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::reminders::entities::Reminder;
use crate::storage::Storage;

/// 由到期提醒构造通知请求
fn build_due_notification(reminder: &Reminder) -> CreateNotificationRequest {
    CreateNotificationRequest {
        user_id: reminder.user_id,
        notification_type: Notification::TYPE_REMINDER_DUE.to_string(),
        title: format!("Reminder due: {}", reminder.title),
        content: reminder.notes.clone(),
        reference_type: Some(Notification::REF_REMINDER.to_string()),
        reference_id: Some(reminder.id),
    }
}

/// 执行一轮到期提醒扫描
pub async fn scan_due_reminders(storage: &Arc<dyn Storage>, batch_size: u64) {
    let now = chrono::Utc::now();

    let due = match storage.list_due_reminders(now, batch_size).await {
        Ok(due) => due,
        Err(e) => {
            error!("Failed to scan due reminders: {}", e);
            return;
        }
    };

    if due.is_empty() {
        return;
    }

    debug!("Scheduler found {} due reminder(s)", due.len());

    for reminder in due {
        // 先写通知，成功后再置位，失败的提醒留到下一轮
        if let Err(e) = storage
            .create_notification(build_due_notification(&reminder))
            .await
        {
            error!(
                "Failed to create notification for reminder {}: {}",
                reminder.id, e
            );
            continue;
        }

        match storage.mark_reminder_notified(reminder.id).await {
            Ok(true) => info!(
                "Reminder {} due, user {} notified",
                reminder.id, reminder.user_id
            ),
            Ok(false) => warn!(
                "Reminder {} disappeared before it could be marked notified",
                reminder.id
            ),
            Err(e) => error!("Failed to mark reminder {} as notified: {}", reminder.id, e),
        }
    }
}

/// 定时任务主循环，shutdown 信号翻转后退出
pub async fn run_reminder_scheduler(
    storage: Arc<dyn Storage>,
    mut shutdown: watch::Receiver<bool>,
) {
    let config = AppConfig::get();
    let tick_interval = config.scheduler.tick_interval.max(1);
    let batch_size = config.scheduler.batch_size;

    let mut ticker = tokio::time::interval(Duration::from_secs(tick_interval));
    // 错过的节拍顺延，不补发
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    warn!(
        "Reminder scheduler started (tick every {}s, batch size {})",
        tick_interval, batch_size
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                scan_due_reminders(&storage, batch_size).await;
            }
            result = shutdown.changed() => {
                // 发送端整个关闭时同样按退出处理
                if result.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    warn!("Reminder scheduler stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reminder() -> Reminder {
        let now = chrono::Utc::now();
        Reminder {
            id: 7,
            user_id: 3,
            title: "交作业".to_string(),
            notes: Some("数学第5章".to_string()),
            due_at: now,
            completed: false,
            notified: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_build_due_notification() {
        let reminder = sample_reminder();
        let request = build_due_notification(&reminder);

        assert_eq!(request.user_id, 3);
        assert_eq!(request.notification_type, Notification::TYPE_REMINDER_DUE);
        assert_eq!(
            request.reference_type.as_deref(),
            Some(Notification::REF_REMINDER)
        );
        assert_eq!(request.reference_id, Some(7));
        assert!(request.title.contains("交作业"));
        assert_eq!(request.content.as_deref(), Some("数学第5章"));
    }
}
