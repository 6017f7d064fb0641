//! Re-prompting input helpers. Bad input never escapes these loops.

use super::console::Console;
use crate::core::error::Result;

/// `y` or empty means yes, `n` means no; anything else asks again.
pub fn ask_yes_no(console: &mut impl Console, prompt: &str) -> Result<bool> {
    loop {
        let answer = console.read_line(prompt)?.trim().to_lowercase();
        match answer.as_str() {
            "y" | "" => return Ok(true),
            "n" => return Ok(false),
            _ => console.write_line("\n❌ Invalid choice. Please enter 'Y' or 'N'.")?,
        }
    }
}

pub fn ask_hero_name(console: &mut impl Console) -> Result<String> {
    loop {
        let name = console.read_line("> Hero name: ")?;
        let name = name.trim();
        if name.is_empty() {
            console.write_line("\n❌ Please enter a valid hero name. The name cannot be empty.\n")?;
        } else {
            return Ok(name.to_string());
        }
    }
}

pub fn press_enter(console: &mut impl Console, what: &str) -> Result<()> {
    console.read_line(&format!("\n> [press ENTER {what}]"))?;
    Ok(())
}

/// Returns false when the player types `q`.
pub fn ask_play_again(console: &mut impl Console) -> Result<bool> {
    let answer = console.read_line("> [press ENTER to play again, or type 'q' to quit]: ")?;
    Ok(!answer.trim().eq_ignore_ascii_case("q"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::console::ScriptedConsole;

    #[test]
    fn test_yes_no_accepts_enter_as_yes() {
        let mut console = ScriptedConsole::new(&[""]);
        assert!(ask_yes_no(&mut console, "? ").unwrap());
    }

    #[test]
    fn test_yes_no_case_insensitive() {
        let mut console = ScriptedConsole::new(&["N", "Y"]);
        assert!(!ask_yes_no(&mut console, "? ").unwrap());
        assert!(ask_yes_no(&mut console, "? ").unwrap());
    }

    #[test]
    fn test_yes_no_reprompts_on_garbage() {
        let mut console = ScriptedConsole::new(&["maybe", "yes please", "n"]);
        assert!(!ask_yes_no(&mut console, "? ").unwrap());
        let errors = console
            .output()
            .iter()
            .filter(|line| line.contains("Invalid choice"))
            .count();
        assert_eq!(errors, 2);
    }

    #[test]
    fn test_hero_name_rejects_empty() {
        let mut console = ScriptedConsole::new(&["", "   ", " Ayla "]);
        assert_eq!(ask_hero_name(&mut console).unwrap(), "Ayla");
        assert!(console.transcript().contains("cannot be empty"));
    }

    #[test]
    fn test_play_again() {
        let mut console = ScriptedConsole::new(&["", "Q"]);
        assert!(ask_play_again(&mut console).unwrap());
        assert!(!ask_play_again(&mut console).unwrap());
    }

    #[test]
    fn test_closed_input_propagates() {
        let mut console = ScriptedConsole::new(&[]);
        assert!(ask_yes_no(&mut console, "? ").is_err());
    }
}
