//! Gallery modal core: open/closed state, modular cursor navigation,
//! guarded key dispatch and the page scroll-suppression lock.

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub title: String,
}

impl GalleryImage {
    pub fn new(src: &str, title: &str) -> Self {
        Self {
            src: src.to_string(),
            title: title.to_string(),
        }
    }
}

/// Keyboard intents the modal reacts to while open.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GalleryKey {
    Previous,
    Next,
    Close,
}

/// Scoped page-scroll suppression. Acquired when a modal opens, released
/// exactly once when it closes; re-acquiring while held and releasing
/// while free are no-ops.
#[derive(Debug, Default)]
pub struct ScrollLock {
    held: bool,
}

impl ScrollLock {
    pub fn acquire(&mut self) -> bool {
        if self.held {
            return false;
        }

        self.held = true;
        true
    }

    pub fn release(&mut self) -> bool {
        if !self.held {
            return false;
        }

        self.held = false;
        true
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

#[derive(Debug)]
struct ActiveGallery {
    images: Vec<GalleryImage>,
    index: usize,
}

/// The lightbox state machine. The caller owns which gallery becomes
/// active; the modal owns the cursor and the scroll lock.
#[derive(Debug, Default)]
pub struct GalleryModal {
    active: Option<ActiveGallery>,
    scroll_lock: ScrollLock,
}

impl GalleryModal {
    /// Open with `images`, cursor at 0. An empty gallery is an invalid
    /// open request and leaves the modal closed (not an error).
    pub fn open(&mut self, images: Vec<GalleryImage>) {
        if images.is_empty() {
            return;
        }

        self.scroll_lock.acquire();
        self.active = Some(ActiveGallery { images, index: 0 });
    }

    pub fn close(&mut self) {
        self.active = None;
        self.scroll_lock.release();
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_held()
    }

    /// Advance the cursor, wrapping past the last image to 0.
    pub fn next(&mut self) {
        if let Some(gallery) = &mut self.active {
            gallery.index = (gallery.index + 1) % gallery.images.len();
        }
    }

    /// Step the cursor back, wrapping past 0 to the last image.
    pub fn previous(&mut self) {
        if let Some(gallery) = &mut self.active {
            gallery.index = (gallery.index + gallery.images.len() - 1) % gallery.images.len();
        }
    }

    /// Thumbnail selection: move the cursor straight to `index`.
    /// Out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) {
        if let Some(gallery) = &mut self.active {
            if index < gallery.images.len() {
                gallery.index = index;
            }
        }
    }

    /// Key dispatch, guarded on the open state: bindings never fire while
    /// the modal is closed.
    pub fn on_key(&mut self, key: GalleryKey) {
        if !self.is_open() {
            return;
        }

        match key {
            GalleryKey::Previous => self.previous(),
            GalleryKey::Next => self.next(),
            GalleryKey::Close => self.close(),
        }
    }

    pub fn current(&self) -> Option<&GalleryImage> {
        self.active
            .as_ref()
            .and_then(|gallery| gallery.images.get(gallery.index))
    }

    /// `(cursor, length)` while open.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.active
            .as_ref()
            .map(|gallery| (gallery.index, gallery.images.len()))
    }

    pub fn images(&self) -> &[GalleryImage] {
        self.active
            .as_ref()
            .map(|gallery| gallery.images.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<GalleryImage> {
        (0..n)
            .map(|i| GalleryImage::new(&format!("/projects/shot-{i}.png"), &format!("Shot {i}")))
            .collect()
    }

    #[test]
    fn test_cursor_wraparound() {
        let mut modal = GalleryModal::default();
        modal.open(images(3));
        assert_eq!(modal.position(), Some((0, 3)));

        modal.previous();
        assert_eq!(modal.position(), Some((2, 3)));

        modal.next();
        assert_eq!(modal.position(), Some((0, 3)));

        modal.next();
        modal.next();
        modal.next();
        assert_eq!(modal.position(), Some((0, 3)));
    }

    #[test]
    fn test_select_thumbnail() {
        let mut modal = GalleryModal::default();
        modal.open(images(4));

        modal.select(2);
        assert_eq!(modal.position(), Some((2, 4)));
        assert_eq!(modal.current().unwrap().title, "Shot 2");

        // out of range is ignored
        modal.select(4);
        assert_eq!(modal.position(), Some((2, 4)));
    }

    #[test]
    fn test_empty_gallery_renders_nothing() {
        let mut modal = GalleryModal::default();
        modal.open(vec![]);

        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
        assert!(modal.current().is_none());
        assert!(modal.images().is_empty());

        // navigation on a closed modal is a no-op, not a panic
        modal.next();
        modal.previous();
        modal.select(0);
        assert!(modal.position().is_none());
    }

    #[test]
    fn test_keys_guarded_while_closed() {
        let mut modal = GalleryModal::default();

        modal.on_key(GalleryKey::Next);
        modal.on_key(GalleryKey::Previous);
        modal.on_key(GalleryKey::Close);
        assert!(!modal.is_open());

        modal.open(images(2));
        modal.on_key(GalleryKey::Next);
        assert_eq!(modal.position(), Some((1, 2)));
        modal.on_key(GalleryKey::Previous);
        assert_eq!(modal.position(), Some((0, 2)));

        modal.on_key(GalleryKey::Close);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_scroll_lock_released_exactly_once() {
        let mut modal = GalleryModal::default();

        modal.open(images(2));
        assert!(modal.scroll_locked());

        modal.close();
        assert!(!modal.scroll_locked());

        // rapid toggling never leaks a held lock
        modal.close();
        modal.open(images(2));
        modal.open(images(3));
        assert!(modal.scroll_locked());
        assert_eq!(modal.position(), Some((0, 3)));

        modal.close();
        modal.close();
        assert!(!modal.scroll_locked());

        let mut lock = ScrollLock::default();
        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert!(lock.release());
        assert!(!lock.release());
    }
}
