pub mod daily_attendance;
pub mod leave_record;
pub mod profile;
pub mod role;
