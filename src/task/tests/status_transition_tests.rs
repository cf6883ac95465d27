//! Unit tests for sequential status progression.

use crate::task::domain::{Task, TaskCode, TaskDomainError, TaskName, TaskStatus, User, UserCode};
use rstest::{fixture, rstest};

#[fixture]
fn task() -> Task {
    let user = User::new(
        UserCode::new(1),
        "Alice".to_owned(),
        "alice@example.com".to_owned(),
        "pw".to_owned(),
    );
    Task::new(
        TaskCode::new(10),
        TaskName::new("Write spec").expect("valid name"),
        user,
    )
}

#[rstest]
#[case(TaskStatus::NotStarted, TaskStatus::NotStarted, false)]
#[case(TaskStatus::NotStarted, TaskStatus::InProgress, true)]
#[case(TaskStatus::NotStarted, TaskStatus::Done, false)]
#[case(TaskStatus::InProgress, TaskStatus::NotStarted, false)]
#[case(TaskStatus::InProgress, TaskStatus::InProgress, false)]
#[case(TaskStatus::InProgress, TaskStatus::Done, true)]
#[case(TaskStatus::Done, TaskStatus::NotStarted, false)]
#[case(TaskStatus::Done, TaskStatus::InProgress, false)]
#[case(TaskStatus::Done, TaskStatus::Done, false)]
fn can_advance_to_returns_expected(
    #[case] from: TaskStatus,
    #[case] to: TaskStatus,
    #[case] expected: bool,
) {
    assert_eq!(from.can_advance_to(to), expected);
}

#[rstest]
#[case(TaskStatus::NotStarted, Some(TaskStatus::InProgress))]
#[case(TaskStatus::InProgress, Some(TaskStatus::Done))]
#[case(TaskStatus::Done, None)]
fn next_steps_one_forward(#[case] status: TaskStatus, #[case] expected: Option<TaskStatus>) {
    assert_eq!(status.next(), expected);
}

#[rstest]
#[case(TaskStatus::NotStarted, false)]
#[case(TaskStatus::InProgress, false)]
#[case(TaskStatus::Done, true)]
fn is_terminal_returns_expected(#[case] status: TaskStatus, #[case] expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[rstest]
fn advance_walks_the_full_progression(task: Task) {
    let mut walked = task;

    walked
        .advance_to(TaskStatus::InProgress)
        .expect("first step");
    walked.advance_to(TaskStatus::Done).expect("second step");

    assert_eq!(walked.status(), TaskStatus::Done);
}

#[rstest]
fn advance_rejects_skipping_ahead(task: Task) {
    let mut walked = task;

    let result = walked.advance_to(TaskStatus::Done);

    assert_eq!(
        result,
        Err(TaskDomainError::InvalidStatusChange {
            code: TaskCode::new(10),
            from: TaskStatus::NotStarted,
            to: TaskStatus::Done,
        })
    );
    assert_eq!(walked.status(), TaskStatus::NotStarted);
}

#[rstest]
fn advance_rejects_standing_still(task: Task) {
    let mut walked = task;

    let result = walked.advance_to(TaskStatus::NotStarted);

    assert!(matches!(
        result,
        Err(TaskDomainError::InvalidStatusChange { .. })
    ));
    assert_eq!(walked.status(), TaskStatus::NotStarted);
}

#[rstest]
fn advance_rejects_regression(task: Task) {
    let mut walked = task;
    walked
        .advance_to(TaskStatus::InProgress)
        .expect("first step");

    let result = walked.advance_to(TaskStatus::NotStarted);

    assert!(matches!(
        result,
        Err(TaskDomainError::InvalidStatusChange { .. })
    ));
    assert_eq!(walked.status(), TaskStatus::InProgress);
}

#[rstest]
fn advance_rejects_leaving_terminal_status(task: Task) {
    let mut walked = task;
    walked
        .advance_to(TaskStatus::InProgress)
        .expect("first step");
    walked.advance_to(TaskStatus::Done).expect("second step");

    let result = walked.advance_to(TaskStatus::Done);

    assert!(matches!(
        result,
        Err(TaskDomainError::InvalidStatusChange { .. })
    ));
    assert_eq!(walked.status(), TaskStatus::Done);
}
