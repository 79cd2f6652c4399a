pub use super::group::Entity as Group;
pub use super::group_member::Entity as GroupMember;
pub use super::message::Entity as Message;
pub use super::user::Entity as User;
