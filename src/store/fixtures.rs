use chrono::NaiveDate;
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::model::{
    daily_attendance::{AttendanceStatus, DailyAttendanceEntry, NOT_SET},
    leave_record::{LeaveRecord, LeaveStatus, LeaveType},
    profile::Profile,
    role::Role,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn leave(
    id: u64,
    name: &str,
    designation: &str,
    department: &str,
    leave_type: LeaveType,
    status: LeaveStatus,
    (start, end): (NaiveDate, NaiveDate),
    description: &str,
    contact: &str,
) -> LeaveRecord {
    LeaveRecord {
        id,
        name: name.to_string(),
        designation: designation.to_string(),
        department: department.to_string(),
        leave_type,
        status,
        start_date: start,
        end_date: end,
        description: description.to_string(),
        contact: contact.to_string(),
    }
}

pub static LEAVE_RECORDS: Lazy<Vec<LeaveRecord>> = Lazy::new(|| {
    vec![
        leave(
            1,
            "Anita Sharma",
            "Senior Teacher",
            "Mathematics",
            LeaveType::Medical,
            LeaveStatus::Approved,
            (ymd(2026, 10, 12), ymd(2026, 10, 24)),
            "Post-surgery recovery",
            "+91 98765 43210",
        ),
        leave(
            2,
            "David Thomas",
            "Lab Assistant",
            "Science",
            LeaveType::Vacation,
            LeaveStatus::Approved,
            (ymd(2026, 10, 15), ymd(2026, 10, 22)),
            "Family trip",
            "+91 98220 11223",
        ),
        leave(
            3,
            "Meera Iyer",
            "Head of Department",
            "English",
            LeaveType::Conference,
            LeaveStatus::Pending,
            (ymd(2026, 10, 16), ymd(2026, 10, 19)),
            "National literature conference",
            "+91 99001 22334",
        ),
        leave(
            4,
            "Suresh Kumar",
            "Professor",
            "Social Studies",
            LeaveType::Sabbatical,
            LeaveStatus::Approved,
            (ymd(2026, 7, 1), ymd(2026, 12, 31)),
            "Research sabbatical",
            "+91 97654 32100",
        ),
        leave(
            5,
            "Priya Nair",
            "Librarian",
            "Administration",
            LeaveType::Personal,
            LeaveStatus::Pending,
            (ymd(2026, 11, 3), ymd(2026, 11, 4)),
            "Personal errand",
            "+91 90123 45678",
        ),
        leave(
            6,
            "Farhan Ali",
            "Sports Coach",
            "Physical Education",
            LeaveType::Medical,
            LeaveStatus::Approved,
            (ymd(2026, 9, 2), ymd(2026, 9, 5)),
            "Viral fever",
            "+91 93456 78901",
        ),
    ]
});

fn day(date: NaiveDate, in_time: &str, out_time: &str, hours: &str, status: AttendanceStatus) -> DailyAttendanceEntry {
    DailyAttendanceEntry {
        id: Uuid::new_v4(),
        date,
        in_time: in_time.to_string(),
        out_time: out_time.to_string(),
        working_hours: hours.to_string(),
        status,
    }
}

/// Newest first.
pub fn attendance_history() -> Vec<DailyAttendanceEntry> {
    vec![
        day(ymd(2026, 10, 16), "08:52", "16:10", "7h 18m", AttendanceStatus::Present),
        day(ymd(2026, 10, 15), "09:05", "13:00", "3h 55m", AttendanceStatus::HalfDay),
        day(ymd(2026, 10, 14), NOT_SET, NOT_SET, NOT_SET, AttendanceStatus::Holiday),
        day(ymd(2026, 10, 13), "08:47", "16:30", "7h 43m", AttendanceStatus::Present),
        day(ymd(2026, 10, 12), "08:58", "16:05", "7h 07m", AttendanceStatus::Present),
    ]
}

pub fn profile() -> Profile {
    Profile {
        name: "Rahul Verma".to_string(),
        email: "rahul.verma@school.edu".to_string(),
        phone: "+91 90000 11111".to_string(),
        role: Role::Teacher,
        teacher_id: "TCH-1042".to_string(),
        password: "changeme".to_string(),
        profile_pic: "/images/avatars/default.png".to_string(),
    }
}
