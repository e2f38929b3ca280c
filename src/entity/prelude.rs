//! 实体别名预导入，存储实现统一从这里引用

pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as AttendanceRecords, Model as AttendanceModel,
};
pub use super::class_members::{
    ActiveModel as ClassMemberActiveModel, Entity as ClassMembers, Model as ClassMemberModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::events::{ActiveModel as EventActiveModel, Entity as Events, Model as EventModel};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::reminders::{
    ActiveModel as ReminderActiveModel, Entity as Reminders, Model as ReminderModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
