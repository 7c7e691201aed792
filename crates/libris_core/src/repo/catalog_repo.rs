//! Catalog store contract and in-memory implementation.
//!
//! # Responsibility
//! - Append, look up and list items and members.
//! - Own the member id counter so id assignment depends only on store state.
//!
//! # Invariants
//! - `add_item` performs no duplicate-id check; `find_item` returns the first
//!   match.
//! - Every member created through the store takes the next counter value.

use crate::model::item::{Item, ItemId, RecordValidationError};
use crate::model::member::{Member, MemberId, MemberIdCounter, MemberKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure of a single catalog operation. Never fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    ItemNotFound(ItemId),
    MemberNotFound(MemberId),
    AlreadyIssued { item_id: ItemId, title: String },
    Validation(RecordValidationError),
}

impl CatalogError {
    /// Stable snake_case code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ItemNotFound(_) => "item_not_found",
            Self::MemberNotFound(_) => "member_not_found",
            Self::AlreadyIssued { .. } => "already_issued",
            Self::Validation(_) => "invalid_record",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_) | Self::MemberNotFound(_))
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemNotFound(id) => write!(f, "item not found: {id}"),
            Self::MemberNotFound(id) => write!(f, "member not found: {id}"),
            Self::AlreadyIssued { item_id, title } => {
                write!(f, "item {item_id} (`{title}`) is already issued")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::ItemNotFound(_) | Self::MemberNotFound(_) | Self::AlreadyIssued { .. } => None,
        }
    }
}

impl From<RecordValidationError> for CatalogError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage interface for catalog records.
pub trait CatalogRepository {
    fn add_item(&mut self, item: Item);
    fn add_member(&mut self, member: Member);
    /// Hands out the next member id and advances the store's counter.
    fn allocate_member_id(&mut self) -> MemberId;
    fn find_item(&self, id: ItemId) -> CatalogResult<&Item>;
    fn find_item_mut(&mut self, id: ItemId) -> CatalogResult<&mut Item>;
    fn find_member(&self, id: MemberId) -> CatalogResult<&Member>;
    fn list_items(&self) -> &[Item];
    fn list_members(&self) -> &[Member];

    /// Constructs a member with a fresh id and appends it.
    fn create_member(&mut self, name: String, kind: MemberKind) -> MemberId {
        let id = self.allocate_member_id();
        self.add_member(Member::new(id, name, kind));
        id
    }
}

/// Vec-backed catalog store.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
    items: Vec<Item>,
    members: Vec<Member>,
    member_ids: MemberIdCounter,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose first member id is `first_member_id`.
    pub fn with_first_member_id(first_member_id: MemberId) -> Self {
        Self {
            member_ids: MemberIdCounter::starting_at(first_member_id),
            ..Self::default()
        }
    }

    /// Returns the id the next created member will receive.
    pub fn next_member_id(&self) -> MemberId {
        self.member_ids.peek()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    fn allocate_member_id(&mut self) -> MemberId {
        self.member_ids.allocate()
    }

    fn find_item(&self, id: ItemId) -> CatalogResult<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(CatalogError::ItemNotFound(id))
    }

    fn find_item_mut(&mut self, id: ItemId) -> CatalogResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CatalogError::ItemNotFound(id))
    }

    fn find_member(&self, id: MemberId) -> CatalogResult<&Member> {
        self.members
            .iter()
            .find(|member| member.id == id)
            .ok_or(CatalogError::MemberNotFound(id))
    }

    fn list_items(&self) -> &[Item] {
        &self.items
    }

    fn list_members(&self) -> &[Member] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogRepository, InMemoryCatalogRepository};
    use crate::model::item::Item;
    use crate::model::member::MemberKind;

    #[test]
    fn duplicate_item_ids_resolve_to_first_inserted() {
        let mut repo = InMemoryCatalogRepository::new();
        repo.add_item(Item::book(7, "first", "a", 1));
        repo.add_item(Item::book(7, "second", "b", 2));

        assert_eq!(repo.list_items().len(), 2);
        assert_eq!(repo.find_item(7).unwrap().title, "first");
    }

    #[test]
    fn create_member_uses_store_counter() {
        let mut repo = InMemoryCatalogRepository::with_first_member_id(50);
        let first = repo.create_member("Ann".to_string(), MemberKind::Standard);
        let second = repo.create_member("Ben".to_string(), MemberKind::Standard);

        assert_eq!((first, second), (50, 51));
        assert_eq!(repo.next_member_id(), 52);
    }
}
