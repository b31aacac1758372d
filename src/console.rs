//! Interactive console adapter
//!
//! A thin menu loop over `PhoneBookDirectory`: collects field values,
//! invokes the repository, and renders results as plain-text tables. All
//! repository errors are printed and the session returns to the main menu.

use crate::book_log;
use crate::error::PhoneBookError;
use crate::logger::LogLevel;
use crate::record::{PhoneBookRecord, SearchField};
use crate::repository::PhoneBookDirectory;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

/// Table headers, id first then the six text fields in record order
const COLUMNS: [&str; 7] = [
    "ID",
    "Last name",
    "First name",
    "Middle name",
    "Organization",
    "Work phone",
    "Personal phone",
];

/// Main menu commands, keyed by the digit the user enters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ListRecords,
    AddRecord,
    EditRecord,
    SearchRecords,
    Quit,
}

impl MenuCommand {
    /// Parse a menu choice. Returns `None` for anything outside 1-5.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ListRecords),
            "2" => Some(Self::AddRecord),
            "3" => Some(Self::EditRecord),
            "4" => Some(Self::SearchRecords),
            "5" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Prompt label for a searchable field
fn field_label(field: SearchField) -> &'static str {
    match field {
        SearchField::LastName => "Last name",
        SearchField::FirstName => "First name",
        SearchField::MiddleName => "Middle name",
        SearchField::Organization => "Organization",
        SearchField::WorkPhone => "Work phone",
        SearchField::PersonalPhone => "Personal phone",
    }
}

/// Render records as a bordered text table.
pub fn render_table(records: &[PhoneBookRecord]) -> String {
    let rows: Vec<[String; 7]> = records
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.last_name.clone(),
                r.first_name.clone(),
                r.middle_name.clone(),
                r.organization.clone(),
                r.work_phone.clone(),
                r.personal_phone.clone(),
            ]
        })
        .collect();

    // Column width = widest cell, header included, in characters
    let mut widths: [usize; 7] = [0; 7];
    for (i, header) in COLUMNS.iter().enumerate() {
        widths[i] = header.chars().count();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border: String = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let format_row = |cells: &[String; 7]| -> String {
        let mut line = String::from("|");
        for (i, cell) in cells.iter().enumerate() {
            let padding = widths[i] - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(padding + 1));
            line.push('|');
        }
        line
    };

    let header_cells: [String; 7] = COLUMNS.map(String::from);
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format_row(&header_cells));
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out.push_str(&border);
    out
}

/// Interactive phone book session over standard input/output
pub struct ConsoleUi {
    directory: PhoneBookDirectory,
    per_page: usize,
}

impl ConsoleUi {
    pub fn new(directory: PhoneBookDirectory, per_page: usize) -> Self {
        Self {
            directory,
            per_page: per_page.max(1),
        }
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self) {
        println!("Welcome to the phone book!");
        loop {
            Self::print_menu();
            let choice = match prompt("Enter a command number: ") {
                Some(choice) => choice,
                None => break,
            };
            match MenuCommand::parse(&choice) {
                Some(MenuCommand::ListRecords) => self.list_records(),
                Some(MenuCommand::AddRecord) => self.add_record(),
                Some(MenuCommand::EditRecord) => self.edit_record(),
                Some(MenuCommand::SearchRecords) => self.search_records(),
                Some(MenuCommand::Quit) => {
                    println!("Goodbye!");
                    break;
                }
                None => println!("Invalid input. Please choose a command from the list."),
            }
        }
    }

    fn print_menu() {
        println!("The following commands are available:");
        println!("1. Show existing records.");
        println!("2. Add a new record.");
        println!("3. Edit an existing record.");
        println!("4. Search records.");
        println!("5. Quit.");
    }

    /// Page through the directory with n/p/q navigation.
    fn list_records(&self) {
        let max_pages = self.directory.page_count(self.per_page);
        if max_pages == 0 {
            println!("The phone book is empty.");
            return;
        }

        let mut page = 1;
        self.render_page(page, max_pages);
        loop {
            let choice = match prompt(
                "Enter 'n' for the next page, 'p' for the previous page, 'q' for the main menu: ",
            ) {
                Some(choice) => choice,
                None => return,
            };
            match choice.trim() {
                "n" => {
                    if page == max_pages {
                        println!("This is the last page.");
                    } else {
                        page += 1;
                        self.render_page(page, max_pages);
                    }
                }
                "p" => {
                    if page == 1 {
                        println!("You are already on the first page.");
                    } else {
                        page -= 1;
                        self.render_page(page, max_pages);
                    }
                }
                "q" => {
                    println!("Returning to the main menu...");
                    return;
                }
                _ => println!("Invalid input. Please choose 'n', 'p' or 'q'."),
            }
        }
    }

    fn render_page(&self, page: usize, max_pages: usize) {
        println!("Page {} of {}:", page, max_pages);
        println!("{}", render_table(self.directory.page(page, self.per_page)));
    }

    fn add_record(&mut self) {
        println!("Adding a new record...");
        let id = self.directory.next_id();
        let record = PhoneBookRecord {
            id,
            last_name: prompt("Enter last name: ").unwrap_or_default(),
            first_name: prompt("Enter first name: ").unwrap_or_default(),
            middle_name: prompt("Enter middle name: ").unwrap_or_default(),
            organization: prompt("Enter organization: ").unwrap_or_default(),
            work_phone: prompt("Enter work phone: ").unwrap_or_default(),
            personal_phone: prompt("Enter personal phone: ").unwrap_or_default(),
        };
        match self.directory.add(record) {
            Ok(()) => println!("New record added successfully!"),
            Err(e) => report_error(e),
        }
    }

    fn edit_record(&mut self) {
        println!("Editing an existing record...");
        let max_id = self.directory.len();
        if max_id == 0 {
            println!("The phone book is empty, nothing to edit.");
            return;
        }

        let id = loop {
            let input = match prompt("Enter the id of the record to edit: ") {
                Some(input) => input,
                None => return,
            };
            match input.trim().parse::<usize>() {
                Ok(id) if (1..=max_id).contains(&id) => break id,
                _ => println!("Invalid input! Enter a number between 1 and {}.", max_id),
            }
        };

        let current = self.directory.records()[id - 1].clone();
        println!("Enter new values (leave a field blank to keep the current value):");
        let record = PhoneBookRecord {
            id: current.id,
            last_name: prompt_with_default("Last name", &current.last_name),
            first_name: prompt_with_default("First name", &current.first_name),
            middle_name: prompt_with_default("Middle name", &current.middle_name),
            organization: prompt_with_default("Organization", &current.organization),
            work_phone: prompt_with_default("Work phone", &current.work_phone),
            personal_phone: prompt_with_default("Personal phone", &current.personal_phone),
        };
        match self.directory.update(id - 1, record) {
            Ok(()) => println!("Record updated successfully!"),
            Err(e) => report_error(e),
        }
    }

    fn search_records(&self) {
        println!("Searching records...");
        println!("Enter values to search for (leave a field blank to skip it):");

        let mut criteria: HashMap<String, String> = HashMap::new();
        for field in SearchField::all() {
            if let Some(value) = prompt(&format!("{}: ", field_label(*field))) {
                if !value.is_empty() {
                    criteria.insert(field.as_str().to_string(), value);
                }
            }
        }

        match self.directory.search(&criteria) {
            Ok(found) if found.is_empty() => println!("No records match your query."),
            Ok(found) => {
                println!("The following records match your query:");
                println!("{}", render_table(&found));
            }
            Err(e) => report_error(e),
        }
    }
}

fn report_error(error: PhoneBookError) {
    book_log!(LogLevel::Error, "console", "Operation failed: {}", error);
    println!("Error: {}", error);
}

/// Print a prompt and read one line. Returns `None` when input ends.
fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Prompt showing the current value; blank input keeps it.
fn prompt_with_default(label: &str, current: &str) -> String {
    match prompt(&format!("{} (current: {}): ", label, current)) {
        Some(value) if !value.is_empty() => value,
        _ => current.to_string(),
    }
}
