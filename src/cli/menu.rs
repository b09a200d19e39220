use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use std::io::stdout;

use super::render::{banner, clear_screen, error_line, menu_header, success_line};
use super::{run_and_report, BatchRunner};
use crate::batch::BatchJob;
use crate::roll_number::{parse_list, RollNumber};

const MENU_ITEMS: [&str; 3] = [
    "Enter Roll No [FAXX-ABC-000]",
    "Enter First and Last Roll No to get whole class GPA",
    "Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Range,
    Exit,
}

impl MenuChoice {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::List),
            1 => Some(Self::Range),
            2 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive loop. Job errors are printed and the loop continues; only
/// terminal I/O errors end it early.
pub async fn main_menu(runner: &BatchRunner) -> Result<()> {
    loop {
        clear_screen(&mut stdout())?;
        println!("{}", banner());
        println!("{}", menu_header());

        let selection = Select::new()
            .with_prompt("Choose an option")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        match MenuChoice::from_index(selection) {
            Some(MenuChoice::List) => handle_list(runner).await?,
            Some(MenuChoice::Range) => handle_range(runner).await?,
            Some(MenuChoice::Exit) | None => {
                println!("{}", success_line("Exiting program. Goodbye!"));
                return Ok(());
            }
        }

        let again = Confirm::new()
            .with_prompt("Do you want to return to the menu?")
            .default(true)
            .interact()?;
        if !again {
            return Ok(());
        }
    }
}

async fn handle_list(runner: &BatchRunner) -> Result<()> {
    let input: String = Input::new()
        .with_prompt("Enter roll numbers separated by commas")
        .interact_text()?;

    let roll_numbers = match parse_list(&input) {
        Ok(rolls) => rolls,
        Err(e) => {
            println!("{}", error_line(&e.to_string()));
            return Ok(());
        }
    };

    let document_name = if roll_numbers.len() > 1 {
        Input::<String>::new()
            .with_prompt("Enter the name for the PDF file")
            .interact_text()?
    } else {
        roll_numbers
            .first()
            .map(RollNumber::to_string)
            .unwrap_or_default()
    };

    match BatchJob::new(roll_numbers, document_name) {
        Ok(job) => {
            run_and_report(runner, &job).await;
        }
        Err(e) => println!("{}", error_line(&e.to_string())),
    }
    Ok(())
}

async fn handle_range(runner: &BatchRunner) -> Result<()> {
    let first: String = Input::new()
        .with_prompt("Enter the first roll number (FAXX-ABC-000)")
        .interact_text()?;
    let last: String = Input::new()
        .with_prompt("Enter the last roll number (FAXX-ABC-000)")
        .interact_text()?;
    let class_name: String = Input::new()
        .with_prompt("Enter the class name to save the PDF")
        .interact_text()?;

    match BatchJob::from_range(&first, &last, &class_name) {
        Ok(job) => {
            run_and_report(runner, &job).await;
        }
        Err(e) => println!("{}", error_line(&e.to_string())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_indices_map_to_choices() {
        assert_eq!(MenuChoice::from_index(0), Some(MenuChoice::List));
        assert_eq!(MenuChoice::from_index(1), Some(MenuChoice::Range));
        assert_eq!(MenuChoice::from_index(2), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_index(3), None);
        assert_eq!(MENU_ITEMS.len(), 3);
    }
}
