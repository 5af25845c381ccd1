/// Card grid navigation state
pub struct GridState {
    pub selected: Option<usize>,
    /// First visible row of cards
    pub scroll_row: usize,
    /// Cards per row, set by the renderer from the terminal width
    pub columns: usize,
    /// Rows of cards that fit on screen, set by the renderer
    pub visible_rows: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_row: 0,
            columns: 1,
            visible_rows: 1,
        }
    }
}

impl GridState {
    /// Reset after the product list was replaced
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
        self.scroll_row = 0;
    }

    pub fn select_right(&mut self, total: usize) {
        self.move_by(total, 1);
    }

    pub fn select_left(&mut self, total: usize) {
        self.move_by(total, -1);
    }

    pub fn select_down(&mut self, total: usize) {
        self.move_by(total, self.columns.max(1) as isize);
    }

    pub fn select_up(&mut self, total: usize) {
        self.move_by(total, -(self.columns.max(1) as isize));
    }

    pub fn page_down(&mut self, total: usize) {
        let jump = self.columns.max(1) * self.visible_rows.max(1);
        self.move_by(total, jump as isize);
    }

    pub fn page_up(&mut self, total: usize) {
        let jump = self.columns.max(1) * self.visible_rows.max(1);
        self.move_by(total, -(jump as isize));
    }

    pub fn select_first(&mut self, total: usize) {
        if total > 0 {
            self.selected = Some(0);
            self.scroll_row = 0;
        }
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(total - 1);
        self.ensure_visible(total - 1);
    }

    /// Update the layout and keep the selection on screen
    pub fn set_layout(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        if let Some(i) = self.selected {
            self.ensure_visible(i);
        }
    }

    fn move_by(&mut self, total: usize, delta: isize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i as isize + delta).clamp(0, total as isize - 1) as usize,
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    fn ensure_visible(&mut self, index: usize) {
        let row = index / self.columns.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if self.visible_rows > 0 && row >= self.scroll_row + self.visible_rows {
            self.scroll_row = row - self.visible_rows + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: usize, rows: usize) -> GridState {
        let mut g = GridState::default();
        g.set_layout(columns, rows);
        g
    }

    #[test]
    fn moves_across_rows_and_clamps() {
        let mut g = grid(4, 2);
        g.reset(10);
        g.select_down(10);
        assert_eq!(g.selected, Some(4));
        g.select_down(10);
        assert_eq!(g.selected, Some(8));
        g.select_down(10);
        assert_eq!(g.selected, Some(9));
        g.select_left(10);
        assert_eq!(g.selected, Some(8));
        g.select_first(10);
        assert_eq!(g.selected, Some(0));
        g.select_left(10);
        assert_eq!(g.selected, Some(0));
    }

    #[test]
    fn scrolls_to_keep_selection_visible() {
        let mut g = grid(2, 2);
        g.reset(12);
        g.select_last(12);
        assert_eq!(g.scroll_row, 4);
        g.page_up(12);
        assert_eq!(g.selected, Some(7));
        assert_eq!(g.scroll_row, 3);
        g.select_first(12);
        assert_eq!(g.scroll_row, 0);
    }

    #[test]
    fn empty_grid_has_no_selection() {
        let mut g = grid(3, 3);
        g.reset(0);
        g.select_down(0);
        assert_eq!(g.selected, None);
    }
}
