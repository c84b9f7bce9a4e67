// Position inside a recorded history. Moves are clamped to [0, len - 1],
// stepping past either end leaves the cursor where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    index: usize,
    number_of_steps: usize,
}

impl StepCursor {
    pub fn new(number_of_steps: usize) -> Self {
        Self {
            index: 0,
            number_of_steps: number_of_steps.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn number_of_steps(&self) -> usize {
        self.number_of_steps
    }

    pub fn last_index(&self) -> usize {
        self.number_of_steps - 1
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.index == self.last_index()
    }

    pub fn forward(&mut self) -> usize {
        if !self.is_at_end() {
            self.index += 1;
        }
        self.index
    }

    pub fn backward(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    pub fn rewind(&mut self) -> usize {
        self.index = 0;
        self.index
    }

    pub fn fast_forward(&mut self) -> usize {
        self.index = self.last_index();
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_at_both_ends() {
        let mut cursor = StepCursor::new(3);
        assert_eq!(cursor.backward(), 0);
        assert_eq!(cursor.forward(), 1);
        assert_eq!(cursor.forward(), 2);
        assert_eq!(cursor.forward(), 2);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.rewind(), 0);
        assert!(cursor.is_at_start());
        assert_eq!(cursor.fast_forward(), 2);
        assert_eq!(cursor.backward(), 1);
    }

    #[test]
    fn single_step_history_never_moves() {
        let mut cursor = StepCursor::new(1);
        assert_eq!(cursor.forward(), 0);
        assert_eq!(cursor.backward(), 0);
        assert!(cursor.is_at_start() && cursor.is_at_end());
    }
}
