pub use super::admission::Entity as Admission;
pub use super::alumni::Entity as Alumni;
pub use super::book_issue::Entity as BookIssue;
pub use super::bus_route::Entity as BusRoute;
pub use super::event::Entity as Event;
pub use super::fee::Entity as Fee;
pub use super::library_book::Entity as LibraryBook;
pub use super::notice::Entity as Notice;
pub use super::staff::Entity as Staff;
pub use super::student::Entity as Student;
pub use super::user::Entity as User;
