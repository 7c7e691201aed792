//! Single-line record encoding.
//!
//! Items: `B,<id>,<title>,<author>,<pages>`.
//! Members: `M,<id>,<name>` or `S,<id>,<name>,<student id>`.
//!
//! Lines are split on every comma; there is no quoting. Only the first
//! character of the first field selects the record variant.

use super::ParseReason;
use crate::model::item::{Item, ItemId, ItemKind};
use crate::model::member::{Member, MemberId, MemberKind};
use std::str::FromStr;

pub const FIELD_DELIMITER: char = ',';
pub const BOOK_TAG: char = 'B';
pub const MEMBER_TAG: char = 'M';
pub const STUDENT_TAG: char = 'S';

/// Member fields read from disk, before the store assigns a fresh id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMember {
    /// Id found on disk. Parsed for validation only; not restored.
    pub persisted_id: MemberId,
    pub name: String,
    pub kind: MemberKind,
}

pub fn encode_item(item: &Item) -> String {
    match &item.kind {
        ItemKind::Book { author, page_count } => join_record(
            BOOK_TAG,
            &[
                item.id.to_string().as_str(),
                item.title.as_str(),
                author.as_str(),
                page_count.to_string().as_str(),
            ],
        ),
    }
}

pub fn encode_member(member: &Member) -> String {
    let id = member.id.to_string();
    match &member.kind {
        MemberKind::Standard => join_record(MEMBER_TAG, &[id.as_str(), member.name.as_str()]),
        MemberKind::Student { student_id } => {
            join_record(
                STUDENT_TAG,
                &[id.as_str(), member.name.as_str(), student_id.as_str()],
            )
        }
    }
}

/// Decodes one items-file line.
///
/// Returns `Ok(None)` for lines whose discriminator is not a book tag,
/// including blank lines.
pub fn decode_item_line(line: &str) -> Result<Option<Item>, ParseReason> {
    let fields = split_fields(line);
    if discriminator(&fields) != Some(BOOK_TAG) {
        return Ok(None);
    }

    let id: ItemId = parse_number(&fields, 1, "id")?;
    let title = field(&fields, 2, "title")?;
    let author = field(&fields, 3, "author")?;
    let page_count: u32 = parse_number(&fields, 4, "page_count")?;

    let item = Item::book(id, title, author, page_count);
    item.validate().map_err(ParseReason::Validation)?;
    Ok(Some(item))
}

/// Decodes one members-file line.
///
/// Returns `Ok(None)` for lines whose discriminator is neither a member nor a
/// student tag.
pub fn decode_member_line(line: &str) -> Result<Option<DecodedMember>, ParseReason> {
    let fields = split_fields(line);
    let kind_tag = match discriminator(&fields) {
        Some(tag @ (MEMBER_TAG | STUDENT_TAG)) => tag,
        _ => return Ok(None),
    };

    let persisted_id: MemberId = parse_number(&fields, 1, "id")?;
    let name = field(&fields, 2, "name")?.to_string();
    let kind = if kind_tag == STUDENT_TAG {
        MemberKind::Student {
            student_id: field(&fields, 3, "student_id")?.to_string(),
        }
    } else {
        MemberKind::Standard
    };

    Ok(Some(DecodedMember {
        persisted_id,
        name,
        kind,
    }))
}

fn join_record(tag: char, fields: &[&str]) -> String {
    let mut line = String::from(tag);
    for field in fields {
        line.push(FIELD_DELIMITER);
        line.push_str(field);
    }
    line
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).collect()
}

fn discriminator(fields: &[&str]) -> Option<char> {
    fields.first().and_then(|first| first.chars().next())
}

fn field<'a>(fields: &[&'a str], index: usize, name: &'static str) -> Result<&'a str, ParseReason> {
    fields
        .get(index)
        .copied()
        .ok_or(ParseReason::MissingField { field: name })
}

fn parse_number<T: FromStr>(
    fields: &[&str],
    index: usize,
    name: &'static str,
) -> Result<T, ParseReason> {
    let raw = field(fields, index, name)?;
    raw.parse::<T>().map_err(|_| ParseReason::InvalidNumber {
        field: name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{decode_item_line, decode_member_line, split_fields};
    use crate::codec::ParseReason;
    use crate::model::member::MemberKind;

    #[test]
    fn split_keeps_empty_fields() {
        assert_eq!(split_fields("B,1,,X,10"), vec!["B", "1", "", "X", "10"]);
    }

    #[test]
    fn blank_and_unknown_lines_are_ignored() {
        assert_eq!(decode_item_line(""), Ok(None));
        assert_eq!(decode_item_line("Z,1,a,b,2"), Ok(None));
        assert_eq!(decode_member_line("B,1,a,b,2"), Ok(None));
    }

    #[test]
    fn discriminator_uses_first_character_only() {
        let item = decode_item_line("Book,5,T,A,9").unwrap().unwrap();
        assert_eq!(item.id, 5);
    }

    #[test]
    fn short_book_line_reports_missing_field() {
        let err = decode_item_line("B,1,Title").unwrap_err();
        assert_eq!(err, ParseReason::MissingField { field: "author" });
    }

    #[test]
    fn comma_in_title_shifts_fields_into_page_count() {
        let err = decode_item_line("B,1,Dune, Part One,Herbert,412").unwrap_err();
        assert!(matches!(
            err,
            ParseReason::InvalidNumber { field: "page_count", ref value } if value == "Herbert"
        ));
    }

    #[test]
    fn student_line_decodes_student_id() {
        let decoded = decode_member_line("S,1004,Ana,STU-9").unwrap().unwrap();
        assert_eq!(decoded.persisted_id, 1004);
        assert_eq!(
            decoded.kind,
            MemberKind::Student {
                student_id: "STU-9".to_string()
            }
        );
    }
}
