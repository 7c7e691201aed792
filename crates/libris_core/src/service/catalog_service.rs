//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide the operations the shell calls: add, find, list, issue, load and
//!   save.
//! - Seed demo records into an empty catalog on request.
//!
//! # Invariants
//! - `add_book` validates before storing.
//! - Issuing is one-way: an issued item can never be issued again in the same
//!   catalog.
//! - Issue looks up the item before the member, so a request where both are
//!   missing reports the item.

use crate::codec::{load_catalog, save_catalog, CatalogPaths, LoadReport, SaveReport};
use crate::model::item::{Item, ItemId};
use crate::model::member::{Member, MemberId, MemberKind};
use crate::repo::catalog_repo::{CatalogError, CatalogRepository, CatalogResult};
use log::{info, warn};

/// Loan period reported when none is configured.
pub const DEFAULT_LOAN_DAYS: u32 = 14;

/// Books added by [`CatalogService::seed_defaults`] when the catalog has no
/// items.
const SEED_BOOKS: &[(ItemId, &str, &str, u32)] = &[
    (101, "The C++ Book", "Some Guy", 100),
    (102, "Another C++ Book", "Some Girl", 200),
    (103, "C++ for Dummies", "A Smart Person", 300),
];
const SEED_MEMBER_NAME: &str = "Default User";

/// Confirmation of a successful issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReceipt {
    pub item_id: ItemId,
    pub title: String,
    pub member_id: MemberId,
    pub member_name: String,
    pub loan_days: u32,
}

/// What [`CatalogService::seed_defaults`] added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub items_added: usize,
    pub members_added: usize,
}

/// Use-case facade over a catalog store.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
    loan_days: u32,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_loan_days(repo, DEFAULT_LOAN_DAYS)
    }

    pub fn with_loan_days(repo: R, loan_days: u32) -> Self {
        Self { repo, loan_days }
    }

    /// Borrows the underlying store.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_repo(self) -> R {
        self.repo
    }

    pub fn loan_days(&self) -> u32 {
        self.loan_days
    }

    /// Appends a book after validating it.
    ///
    /// Item ids are not checked for duplicates.
    pub fn add_book(
        &mut self,
        id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        page_count: u32,
    ) -> CatalogResult<()> {
        let item = Item::book(id, title, author, page_count);
        self.add_item(item)
    }

    /// Appends any item after validating it.
    pub fn add_item(&mut self, item: Item) -> CatalogResult<()> {
        if let Err(err) = item.validate() {
            warn!(
                "event=add_item module=catalog status=error error_code=invalid_record item_id={}",
                item.id
            );
            return Err(err.into());
        }
        info!("event=add_item module=catalog status=ok item_id={}", item.id);
        self.repo.add_item(item);
        Ok(())
    }

    /// Creates a standard member and returns its assigned id.
    pub fn add_member(&mut self, name: impl Into<String>) -> MemberId {
        let id = self.repo.create_member(name.into(), MemberKind::Standard);
        info!("event=add_member module=catalog status=ok member_id={id} kind=standard");
        id
    }

    /// Creates a student member and returns its assigned id.
    pub fn add_student(
        &mut self,
        name: impl Into<String>,
        student_id: impl Into<String>,
    ) -> MemberId {
        let kind = MemberKind::Student {
            student_id: student_id.into(),
        };
        let id = self.repo.create_member(name.into(), kind);
        info!("event=add_member module=catalog status=ok member_id={id} kind=student");
        id
    }

    pub fn find_item(&self, id: ItemId) -> CatalogResult<&Item> {
        self.repo.find_item(id)
    }

    pub fn find_member(&self, id: MemberId) -> CatalogResult<&Member> {
        self.repo.find_member(id)
    }

    /// Returns all items in insertion order; empty is a valid result.
    pub fn list_items(&self) -> &[Item] {
        self.repo.list_items()
    }

    /// Returns all members in insertion order; empty is a valid result.
    pub fn list_members(&self) -> &[Member] {
        self.repo.list_members()
    }

    /// Issues an item using the configured loan period.
    pub fn issue_book(
        &mut self,
        item_id: ItemId,
        member_id: MemberId,
    ) -> CatalogResult<IssueReceipt> {
        self.issue_book_for(item_id, member_id, self.loan_days)
    }

    /// Marks `item_id` as issued to `member_id`.
    ///
    /// # Errors
    /// - `ItemNotFound` / `MemberNotFound` when a lookup misses.
    /// - `AlreadyIssued` when the item was issued earlier.
    pub fn issue_book_for(
        &mut self,
        item_id: ItemId,
        member_id: MemberId,
        loan_days: u32,
    ) -> CatalogResult<IssueReceipt> {
        let result = self.try_issue(item_id, member_id, loan_days);
        match &result {
            Ok(_) => info!(
                "event=issue_book module=catalog status=ok item_id={item_id} member_id={member_id} loan_days={loan_days}"
            ),
            Err(err) => warn!(
                "event=issue_book module=catalog status=error error_code={} item_id={item_id} member_id={member_id}",
                err.code()
            ),
        }
        result
    }

    fn try_issue(
        &mut self,
        item_id: ItemId,
        member_id: MemberId,
        loan_days: u32,
    ) -> CatalogResult<IssueReceipt> {
        // Held until the item lookup so a missing item is reported first.
        let member_name = self
            .repo
            .find_member(member_id)
            .map(|member| member.name.clone());
        let item = self.repo.find_item_mut(item_id)?;
        let member_name = member_name?;

        if !item.is_available() {
            return Err(CatalogError::AlreadyIssued {
                item_id,
                title: item.title.clone(),
            });
        }
        item.mark_issued();

        Ok(IssueReceipt {
            item_id,
            title: item.title.clone(),
            member_id,
            member_name,
            loan_days,
        })
    }

    /// Adds the demo books when there are no items and the demo member when
    /// there are no members.
    pub fn seed_defaults(&mut self) -> SeedOutcome {
        let mut outcome = SeedOutcome::default();
        if self.repo.list_items().is_empty() {
            for (id, title, author, pages) in SEED_BOOKS {
                self.repo.add_item(Item::book(*id, *title, *author, *pages));
                outcome.items_added += 1;
            }
        }
        if self.repo.list_members().is_empty() {
            self.repo.create_member(SEED_MEMBER_NAME.to_string(), MemberKind::Standard);
            outcome.members_added += 1;
        }
        if outcome != SeedOutcome::default() {
            info!(
                "event=seed_defaults module=catalog status=ok items={} members={}",
                outcome.items_added, outcome.members_added
            );
        }
        outcome
    }

    /// Loads both data files into this catalog. See [`load_catalog`].
    pub fn load(&mut self, paths: &CatalogPaths) -> LoadReport {
        load_catalog(&mut self.repo, paths)
    }

    /// Saves both data files. See [`save_catalog`].
    pub fn save(&self, paths: &CatalogPaths) -> SaveReport {
        save_catalog(&self.repo, paths)
    }
}
