use crate::Coords;

/// Body segments, head first. Never empty.
pub struct Snake {
    body: Vec<Coords>,
}

impl Snake {
    pub fn new(pos: Coords) -> Self {
        Snake { body: vec![pos] }
    }

    #[cfg(test)]
    pub fn from_segments(body: Vec<Coords>) -> Self {
        assert!(!body.is_empty());
        Snake { body }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn tail(&self) -> Coords {
        self.body[self.body.len() - 1]
    }

    /// Every segment but the head takes its predecessor's place. The head
    /// itself is moved separately by `move_head`.
    pub fn shift_body(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
    }

    pub fn move_head(&mut self, delta: Coords) {
        let head = &mut self.body[0];
        head.0 += delta.0;
        head.1 += delta.1;
    }

    /// Appends a copy of the tail, which trails into place on the next shift.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }
}
