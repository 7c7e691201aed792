//! Text rendering of catalog records and operation outcomes.

use libris_core::{
    CatalogError, IssueReceipt, Item, ItemKind, LoadReport, Member, MemberKind, SaveReport,
};
use std::io::{self, Write};

pub fn write_item(out: &mut impl Write, item: &Item) -> io::Result<()> {
    let status = if item.issued { "Issued" } else { "Available" };
    match &item.kind {
        ItemKind::Book { author, page_count } => {
            writeln!(out, "--- Book Details ---")?;
            writeln!(out, "ID: \t\t{}", item.id)?;
            writeln!(out, "Title: \t\t{}", item.title)?;
            writeln!(out, "Author: \t{author}")?;
            writeln!(out, "Page Count: \t{page_count}")?;
            writeln!(out, "Status: \t{status}")?;
            writeln!(out, "--------------------")
        }
    }
}

pub fn write_member(out: &mut impl Write, member: &Member) -> io::Result<()> {
    writeln!(out, "--- Member Details ---")?;
    writeln!(out, "ID: \t{}", member.id)?;
    writeln!(out, "Name: \t{}", member.name)?;
    match &member.kind {
        MemberKind::Standard => {}
        MemberKind::Student { student_id } => writeln!(out, "Student ID: \t{student_id}")?,
    }
    writeln!(out, "----------------------")
}

pub fn write_item_list(out: &mut impl Write, items: &[Item]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- All Library Items ---")?;
    if items.is_empty() {
        return writeln!(out, "(No items in library)");
    }
    items.iter().try_for_each(|item| write_item(out, item))
}

pub fn write_member_list(out: &mut impl Write, members: &[Member]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- All Library Members ---")?;
    if members.is_empty() {
        return writeln!(out, "(No members in library)");
    }
    members
        .iter()
        .try_for_each(|member| write_member(out, member))
}

pub fn write_receipt(out: &mut impl Write, receipt: &IssueReceipt) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- RECEIPT ---")?;
    writeln!(out, "Book Issued Successfully.")?;
    writeln!(out, "-----------------")?;
    writeln!(out, "Book Title: {}", receipt.title)?;
    writeln!(out, "Member Name: {}", receipt.member_name)?;
    writeln!(out, "Loan Period: {} days.", receipt.loan_days)?;
    writeln!(out, "-----------------")?;
    writeln!(out)
}

pub fn write_catalog_error(out: &mut impl Write, err: &CatalogError) -> io::Result<()> {
    match err {
        CatalogError::ItemNotFound(_) => writeln!(out, "Error: Book not found."),
        CatalogError::MemberNotFound(_) => writeln!(out, "Error: Member not found."),
        CatalogError::AlreadyIssued { .. } => writeln!(out, "Error: Book is already issued."),
        CatalogError::Validation(inner) => writeln!(out, "Error: {inner}."),
    }
}

pub fn write_load_report(out: &mut impl Write, report: &LoadReport) -> io::Result<()> {
    for err in &report.errors {
        writeln!(out, "Warning: skipped {err}")?;
    }
    writeln!(
        out,
        "Data loaded. ({} items, {} members)",
        report.items_loaded, report.members_loaded
    )
}

pub fn write_save_report(out: &mut impl Write, report: &SaveReport) -> io::Result<()> {
    if report.is_ok() {
        return writeln!(out, "Data saved successfully.");
    }
    report
        .errors()
        .try_for_each(|err| writeln!(out, "Error: could not save {err}"))
}
