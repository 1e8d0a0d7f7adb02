use super::*;

const CORNER: &str = "v User\\PC >";

/// Every outcome of a move set laid out as a grid.
///
/// Rows are the user's move, columns the computer's; each cell reads
/// from the row's perspective. One header line is followed by a divider,
/// and every body row is followed by another, so a set of N moves renders
/// N + 1 dividers.
///
/// ```text
/// | v User\PC > | rock     | paper    | scissors |
/// +-------------+----------+----------+----------+
/// | rock        | draw     | lose     | win      |
/// +-------------+----------+----------+----------+
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    moves: &'a Moves,
    rules: Rules,
}

impl<'a> From<&'a Moves> for Table<'a> {
    fn from(moves: &'a Moves) -> Self {
        Self {
            moves,
            rules: moves.rules(),
        }
    }
}

impl Table<'_> {
    /// Outcome for the user playing row `row` against column `col`.
    pub fn cell(&self, row: Move, col: Move) -> Outcome {
        self.rules.outcome(row, col)
    }
    fn label(&self) -> usize {
        self.moves
            .iter()
            .map(|(_, name)| name.chars().count())
            .chain(std::iter::once(CORNER.chars().count()))
            .max()
            .unwrap_or_default()
    }
    fn width(&self) -> usize {
        self.moves
            .iter()
            .map(|(_, name)| name.chars().count())
            .chain(std::iter::once(Outcome::Lose.to_string().len()))
            .max()
            .unwrap_or_default()
    }
    fn divider(&self) -> String {
        std::iter::once(self.label())
            .chain(self.moves.iter().map(|_| self.width()))
            .map(|w| format!("+{}", "-".repeat(w + 2)))
            .chain(std::iter::once(String::from("+")))
            .collect()
    }
    fn row(&self, head: &str, cells: impl Iterator<Item = String>) -> String {
        let label = self.label();
        let width = self.width();
        std::iter::once(format!("| {:<label$} ", head))
            .chain(cells.map(|c| format!("| {:<width$} ", c)))
            .chain(std::iter::once(String::from("|")))
            .collect()
    }
}

impl std::fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let divider = self.divider();
        let header = self.row(CORNER, self.moves.iter().map(|(_, name)| name.to_string()));
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", divider)?;
        for (row, name) in self.moves.iter() {
            let cells = self
                .moves
                .iter()
                .map(|(col, _)| self.cell(row, col).to_string());
            writeln!(f, "{}", self.row(name, cells))?;
            writeln!(f, "{}", divider)?;
        }
        Ok(())
    }
}
