use crate::app::infrastructure::platform::TextStore;

/// The single open document.
///
/// Holds no text of its own; the content lives in the backing store (the
/// FLTK buffer shown by the editor widget, or a `String` in tests). FLTK's
/// buffer has no end-of-buffer marker, so what goes in with `load` comes
/// back from `dump` byte for byte.
pub struct Document<S: TextStore> {
    store: S,
}

impl<S: TextStore> Document<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn clear(&mut self) {
        self.store.replace_all("");
    }

    pub fn load(&mut self, content: &str) {
        self.store.replace_all(content);
    }

    pub fn dump(&self) -> String {
        self.store.contents()
    }

    /// Insert `text` at character position `pos`. Positions past the end append.
    pub fn insert(&mut self, pos: usize, text: &str) {
        let current = self.store.contents();
        let offset = current
            .char_indices()
            .nth(pos)
            .map_or(current.len(), |(i, _)| i);
        self.store.insert_at(offset, text);
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.store.contents().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.store.contents().is_empty()
    }
}
