use crate::{
    model::library::IssueStatus,
    server::{
        data::library::{BookIssueRepository, LibraryBookRepository},
        error::AppError,
        model::library::IssueBookParam,
    },
};
use chrono::{Duration, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_student_with_user, library_book::LibraryBookFactory},
};

mod create_issue;
mod get_all;
mod mark_returned;
mod return_copy;
mod take_copy;
