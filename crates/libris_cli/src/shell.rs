//! Interactive menu loop.
//!
//! # Responsibility
//! - Prompt for a menu choice and field values, convert them to primitives,
//!   and call the catalog service.
//! - Report catalog errors as user-facing messages without ending the loop.
//!
//! # Invariants
//! - End of input behaves like choosing `Exit`.
//! - Numeric prompts repeat until a number is entered.

use crate::render;
use libris_core::{CatalogRepository, CatalogService, ItemId, MemberId};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "
--- Library Menu ---
1. Add Book
2. Add Member
3. Add Student
4. Issue Book
5. Find Book
6. Find Member
7. Display All Items
8. Display All Members
0. Exit";

/// A menu entry that runs a catalog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddBook,
    AddMember,
    AddStudent,
    IssueBook,
    FindBook,
    FindMember,
    ListItems,
    ListMembers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Command(MenuCommand),
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let command = match input.trim() {
            "1" => MenuCommand::AddBook,
            "2" => MenuCommand::AddMember,
            "3" => MenuCommand::AddStudent,
            "4" => MenuCommand::IssueBook,
            "5" => MenuCommand::FindBook,
            "6" => MenuCommand::FindMember,
            "7" => MenuCommand::ListItems,
            "8" => MenuCommand::ListMembers,
            "0" => return Some(Self::Exit),
            _ => return None,
        };
        Some(Self::Command(command))
    }
}

/// Menu loop over any line source and output sink.
pub struct Shell<I: BufRead, O: Write> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Shell<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Runs until `Exit` or end of input.
    pub fn run<R: CatalogRepository>(&mut self, catalog: &mut CatalogService<R>) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let command = match MenuChoice::parse(&line) {
                Some(MenuChoice::Command(command)) => command,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };
            if !self.dispatch(command, catalog)? {
                writeln!(self.output)?;
                return Ok(());
            }
        }
    }

    /// Returns `false` when input ended mid-command.
    fn dispatch<R: CatalogRepository>(
        &mut self,
        command: MenuCommand,
        catalog: &mut CatalogService<R>,
    ) -> io::Result<bool> {
        match command {
            MenuCommand::AddBook => {
                let Some(id) = self.prompt_number::<ItemId>("Enter Book ID: ")? else {
                    return Ok(false);
                };
                let Some(title) = self.prompt("Enter Title: ")? else {
                    return Ok(false);
                };
                let Some(author) = self.prompt("Enter Author: ")? else {
                    return Ok(false);
                };
                let Some(pages) = self.prompt_number::<u32>("Enter Pages: ")? else {
                    return Ok(false);
                };
                match catalog.add_book(id, title, author, pages) {
                    Ok(()) => writeln!(self.output, "Book added!")?,
                    Err(err) => render::write_catalog_error(&mut self.output, &err)?,
                }
            }
            MenuCommand::AddMember => {
                let Some(name) = self.prompt("Enter Name: ")? else {
                    return Ok(false);
                };
                let id = catalog.add_member(name);
                writeln!(self.output, "Member added! ID: {id}")?;
            }
            MenuCommand::AddStudent => {
                let Some(name) = self.prompt("Enter Name: ")? else {
                    return Ok(false);
                };
                let Some(student_id) = self.prompt("Enter Student ID: ")? else {
                    return Ok(false);
                };
                let id = catalog.add_student(name, student_id);
                writeln!(self.output, "Student added! ID: {id}")?;
            }
            MenuCommand::IssueBook => {
                let Some(item_id) = self.prompt_number::<ItemId>("Enter Book ID: ")? else {
                    return Ok(false);
                };
                let Some(member_id) = self.prompt_number::<MemberId>("Enter Member ID: ")? else {
                    return Ok(false);
                };
                match catalog.issue_book(item_id, member_id) {
                    Ok(receipt) => render::write_receipt(&mut self.output, &receipt)?,
                    Err(err) => render::write_catalog_error(&mut self.output, &err)?,
                }
            }
            MenuCommand::FindBook => {
                let Some(id) = self.prompt_number::<ItemId>("Enter Book ID: ")? else {
                    return Ok(false);
                };
                match catalog.find_item(id) {
                    Ok(item) => {
                        writeln!(self.output, "--- Book Found! ---")?;
                        render::write_item(&mut self.output, item)?;
                    }
                    Err(_) => writeln!(self.output, "--- Book Not Found! ---")?,
                }
            }
            MenuCommand::FindMember => {
                let Some(id) = self.prompt_number::<MemberId>("Enter Member ID: ")? else {
                    return Ok(false);
                };
                match catalog.find_member(id) {
                    Ok(member) => {
                        writeln!(self.output, "--- Member Found! ---")?;
                        render::write_member(&mut self.output, member)?;
                    }
                    Err(_) => writeln!(self.output, "--- Member Not Found! ---")?,
                }
            }
            MenuCommand::ListItems => {
                render::write_item_list(&mut self.output, catalog.list_items())?;
            }
            MenuCommand::ListMembers => {
                render::write_member_list(&mut self.output, catalog.list_members())?;
            }
        }
        Ok(true)
    }

    /// Writes `label` and reads one line without its line ending.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt_number<T: FromStr>(&mut self, label: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }
}
