//! # Navigation
//!
//! A small stack navigator: `Home` at the bottom, detail screens pushed on top.
//! The detail screen only receives the book identifier; what it shows for
//! that identifier is up to the screen.

/// Parameters handed to the chapter list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailParams {
    pub book_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    ChapterList(DetailParams),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    /// The route on top of the stack. The stack is never empty.
    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&Route::Home)
    }

    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pops the top route. Returns false when already at `Home`.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
