//! Interactive console front end.
//!
//! Thin I/O glue over the typed service API: prompts for and parses raw
//! menu input, converts it into service calls, and renders returned
//! confirmation or error text. Domain failures are displayed and the menu
//! continues; nothing here terminates the process.

use crate::task::domain::{TaskCode, TaskStatus, User, UserCode};
use crate::task::ports::{StatusLogRepository, TaskRepository, UserRepository};
use crate::task::services::TaskService;
use mockable::Clock;
use std::io::{self, BufRead, Write};

/// Menu text shown once per loop iteration.
const MENU: &str = "\
1. List tasks
2. Register a task
3. Change a task's status
4. Delete a task
5. Quit";

/// Interactive session over a line-based input and an output sink.
///
/// Generic over its streams so sessions can run against in-memory buffers
/// in tests.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Authenticates, then serves the task menu until quit or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading or writing the console streams
    /// fails; domain failures are rendered and the menu continues.
    pub fn run<T, L, U, C, A>(
        &mut self,
        service: &TaskService<T, L, U, C>,
        users: &A,
    ) -> io::Result<()>
    where
        T: TaskRepository,
        L: StatusLogRepository,
        U: UserRepository,
        C: Clock + Send + Sync,
        A: UserRepository,
    {
        let Some(login_user) = self.login(users)? else {
            return Ok(());
        };
        writeln!(self.output, "Welcome, {}.", login_user.name())?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("> ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.list(service, &login_user)?,
                "2" => self.register(service, &login_user)?,
                "3" => self.change_status(service, &login_user)?,
                "4" => self.delete(service)?,
                "5" => return Ok(()),
                other => writeln!(self.output, "Unknown option '{other}'.")?,
            }
        }
    }

    /// Prompts for credentials until they match a user; `None` on end of
    /// input.
    fn login<A: UserRepository>(&mut self, users: &A) -> io::Result<Option<User>> {
        loop {
            let Some(email) = self.prompt("Email: ")? else {
                return Ok(None);
            };
            let Some(password) = self.prompt("Password: ")? else {
                return Ok(None);
            };
            match users.find_by_credentials(&email, &password) {
                Some(user) => return Ok(Some(user)),
                None => writeln!(self.output, "No user matches those credentials.")?,
            }
        }
    }

    fn list<T, L, U, C>(
        &mut self,
        service: &TaskService<T, L, U, C>,
        login_user: &User,
    ) -> io::Result<()>
    where
        T: TaskRepository,
        L: StatusLogRepository,
        U: UserRepository,
        C: Clock + Send + Sync,
    {
        let lines = service.list_all(login_user);
        if lines.is_empty() {
            writeln!(self.output, "No tasks registered.")?;
        }
        for line in &lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn register<T, L, U, C>(
        &mut self,
        service: &TaskService<T, L, U, C>,
        login_user: &User,
    ) -> io::Result<()>
    where
        T: TaskRepository,
        L: StatusLogRepository,
        U: UserRepository,
        C: Clock + Send + Sync,
    {
        let Some(code) = self.prompt_number("Task code: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Task name: ")? else {
            return Ok(());
        };
        let Some(user_code) = self.prompt_number("Assigned user code: ")? else {
            return Ok(());
        };
        match service.create(
            TaskCode::new(code),
            &name,
            UserCode::new(user_code),
            login_user,
        ) {
            Ok(task) => writeln!(self.output, "Registered '{}'.", task.name())?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn change_status<T, L, U, C>(
        &mut self,
        service: &TaskService<T, L, U, C>,
        login_user: &User,
    ) -> io::Result<()>
    where
        T: TaskRepository,
        L: StatusLogRepository,
        U: UserRepository,
        C: Clock + Send + Sync,
    {
        let Some(code) = self.prompt_number("Task code: ")? else {
            return Ok(());
        };
        let Some(status_code) = self.prompt_number("New status (1: in progress, 2: done): ")?
        else {
            return Ok(());
        };
        let parsed = u8::try_from(status_code)
            .ok()
            .map(TaskStatus::from_code)
            .and_then(Result::ok);
        let Some(status) = parsed else {
            writeln!(self.output, "Unknown status code {status_code}, expected 0, 1, or 2.")?;
            return Ok(());
        };
        match service.change_status(TaskCode::new(code), status, login_user) {
            Ok(task) => writeln!(
                self.output,
                "Status of '{}' is now {}.",
                task.name(),
                task.status()
            )?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn delete<T, L, U, C>(&mut self, service: &TaskService<T, L, U, C>) -> io::Result<()>
    where
        T: TaskRepository,
        L: StatusLogRepository,
        U: UserRepository,
        C: Clock + Send + Sync,
    {
        let Some(code) = self.prompt_number("Task code: ")? else {
            return Ok(());
        };
        match service.delete(TaskCode::new(code)) {
            Ok(()) => writeln!(self.output, "Task deleted.")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    /// Writes `text`, then reads one trimmed line; `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Prompts until the input parses as a number; `None` on end of input.
    fn prompt_number(&mut self, text: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(raw) = self.prompt(text)? else {
                return Ok(None);
            };
            match raw.parse::<u32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Enter a whole number.")?,
            }
        }
    }
}
