pub mod m202608250001_create_courses;
pub mod m202608250002_create_participants;
