use anyhow::{Result, ensure};
use slither_core::GameState;

/// Trims the player name, rejecting one that ends up empty.
pub fn player_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    ensure!(!name.is_empty(), "Name invalid: must be longer than 0 characters");
    Ok(name.to_string())
}

/// Boxed end-of-run summary. Widths count characters, so multi-byte names line up.
pub fn render(name: Option<&str>, game: &GameState) -> String {
    let status = if game.is_game_over() {
        "Game over"
    } else {
        "Still alive"
    };
    let mut lines = vec![status.to_string()];
    if let Some(name) = name {
        lines.push(format!("Player: {name}"));
    }
    lines.push(format!("Score: {}", game.score()));
    lines.push(format!("Length: {}", game.snake().len()));

    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let border = format!("+{}+", "-".repeat(width + 2));

    let mut out = format!("{border}\n");
    for line in &lines {
        let pad = width - line.chars().count();
        out.push_str(&format!("| {line}{} |\n", " ".repeat(pad)));
    }
    out.push_str(&format!("{border}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use slither_core::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(player_name("").is_err());
        assert!(player_name(" \t\n").is_err());
        assert_eq!(player_name("  ada\n").unwrap(), "ada");
    }

    #[test]
    fn multibyte_names_align() {
        let board: Board = "B3x4|W4|W1S1E1W1|W4".parse().unwrap();
        let game = GameState::new(board, Rules::default(), &mut |_: usize| 6).unwrap();

        let text = render(Some("蛇"), &game);
        let widths: Vec<usize> = text.lines().map(|line| line.chars().count()).collect();

        assert!(text.contains("| Player: 蛇"));
        assert!(text.contains("| Still alive |"));
        assert!(widths.iter().all(|&w| w == widths[0]), "{text}");
    }
}
