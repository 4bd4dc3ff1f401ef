/// Secondary navigation inside an open detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    None,
    Tabs {
        keys: &'static [&'static str],
        active: usize,
    },
    /// `current` is 1-based.
    Pages { total: usize, current: usize },
}

impl Navigation {
    pub fn tabs(keys: &'static [&'static str]) -> Self {
        Navigation::Tabs { keys, active: 0 }
    }

    pub fn pages(total: usize) -> Self {
        Navigation::Pages {
            total: total.max(1),
            current: 1,
        }
    }

    pub fn active_tab(&self) -> Option<&'static str> {
        match self {
            Navigation::Tabs { keys, active } => keys.get(*active).copied(),
            _ => None,
        }
    }

    pub fn page(&self) -> Option<(usize, usize)> {
        match self {
            Navigation::Pages { total, current } => Some((*current, *total)),
            _ => None,
        }
    }

    pub fn select_tab(&mut self, key: &str) -> bool {
        match self {
            Navigation::Tabs { keys, active } => match keys.iter().position(|k| *k == key) {
                Some(i) => {
                    *active = i;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    pub fn can_prev(&self) -> bool {
        matches!(self, Navigation::Pages { current, .. } if *current > 1)
    }

    pub fn can_next(&self) -> bool {
        matches!(self, Navigation::Pages { total, current } if *current < *total)
    }

    /// Moves one page forward. Refused at the last page; never wraps.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        if let Navigation::Pages { current, .. } = self {
            *current += 1;
        }
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        if let Navigation::Pages { current, .. } = self {
            *current -= 1;
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct Selection<T> {
    pub view: String,
    pub id: String,
    pub record: T,
    pub nav: Navigation,
}

/// Holds at most one open record. The record is an owned snapshot taken at
/// open time; it only changes through `refresh`.
#[derive(Debug, Clone)]
pub struct Presenter<T> {
    selected: Option<Selection<T>>,
}

impl<T> Default for Presenter<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T> Presenter<T> {
    pub fn open(&mut self, view: &str, id: &str, record: T, nav: Navigation) {
        self.selected = Some(Selection {
            view: view.to_string(),
            id: id.to_string(),
            record,
            nav,
        });
    }

    pub fn close(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn selected(&self) -> Option<&Selection<T>> {
        self.selected.as_ref()
    }

    pub fn nav_mut(&mut self) -> Option<&mut Navigation> {
        self.selected.as_mut().map(|s| &mut s.nav)
    }

    /// Replaces the snapshot, keeping the current navigation position.
    pub fn refresh(&mut self, record: T) -> bool {
        match self.selected.as_mut() {
            Some(sel) => {
                sel.record = record;
                true
            }
            None => false,
        }
    }
}
