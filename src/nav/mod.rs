//! Navigation menu model for the portal shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header reads the session's authentication flag to decide which links
//! to render. `NavMenu` keeps that decision current by subscribing to the
//! session store; it never writes to the store.
//!
//! DESIGN
//! ======
//! Items carry a [`Visibility`] instead of a bare `requires_auth` bool so the
//! login link can disappear once the user is signed in.


use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::session::{SessionStore, Subscription};

/// Which sessions a navigation item is shown to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Shown to every visitor.
    Always,
    /// Shown only while authenticated.
    Authenticated,
    /// Shown only while not authenticated.
    Anonymous,
}

impl Visibility {
    #[must_use]
    pub fn allows(self, is_authenticated: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Authenticated => is_authenticated,
            Self::Anonymous => !is_authenticated,
        }
    }
}

/// A leaf link inside a dropdown group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub href: &'static str,
}

/// A top-level navigation entry, optionally grouping child links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub visibility: Visibility,
    pub children: Vec<NavLink>,
}

impl NavItem {
    fn link(title: &'static str, href: &'static str, visibility: Visibility) -> Self {
        Self { title, href, visibility, children: Vec::new() }
    }

    /// True when this item or one of its children points at `pathname`.
    #[must_use]
    pub fn contains(&self, pathname: &str) -> bool {
        is_active(self.href, pathname) || self.children.iter().any(|child| is_active(child.href, pathname))
    }
}

/// The portal's navigation table.
#[must_use]
pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::link("Dashboard", "/", Visibility::Authenticated),
        NavItem {
            title: "Documents",
            href: "/documents",
            visibility: Visibility::Authenticated,
            children: vec![
                NavLink { title: "Inbox", href: "/documents/inbox" },
                NavLink { title: "Sent", href: "/documents/sent" },
                NavLink { title: "Archive", href: "/documents/archive" },
                NavLink { title: "Create New", href: "/documents/create" },
            ],
        },
        NavItem::link("Clients", "/clients", Visibility::Authenticated),
        NavItem::link("Branches", "/branches", Visibility::Authenticated),
        NavItem::link("Users", "/users", Visibility::Authenticated),
        NavItem::link("Complaints", "/reports", Visibility::Authenticated),
        NavItem::link("Login", "/login", Visibility::Anonymous),
    ]
}

/// Items visible for the given authentication flag, in table order.
#[must_use]
pub fn visible_items(items: &[NavItem], is_authenticated: bool) -> Vec<NavItem> {
    items.iter().filter(|item| item.visibility.allows(is_authenticated)).cloned().collect()
}

/// Whether `href` is the current route. A trailing slash is ignored except on `/`.
#[must_use]
pub fn is_active(href: &str, pathname: &str) -> bool {
    normalize(href) == normalize(pathname)
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[derive(Debug)]
struct MenuState {
    items: Vec<NavItem>,
    visible: Vec<NavItem>,
    pathname: String,
    mobile_open: bool,
}

/// Live navigation menu bound to a session store.
///
/// The visible set is recomputed on every session notification. Dropping
/// the menu drops its subscription.
#[derive(Debug)]
pub struct NavMenu {
    state: Rc<RefCell<MenuState>>,
    _subscription: Subscription,
}

impl NavMenu {
    /// Build a menu over `items`, starting at `pathname`, and follow `store`.
    pub fn attach(store: &SessionStore, items: Vec<NavItem>, pathname: impl Into<String>) -> Self {
        let visible = visible_items(&items, store.is_authenticated());
        let state = Rc::new(RefCell::new(MenuState { items, visible, pathname: pathname.into(), mobile_open: false }));

        let sink = Rc::clone(&state);
        let subscription = store.subscribe(move |next, prev| {
            if next.is_authenticated == prev.is_authenticated {
                return;
            }
            let mut menu = sink.borrow_mut();
            menu.visible = visible_items(&menu.items, next.is_authenticated);
            debug!(authenticated = next.is_authenticated, links = menu.visible.len(), "navigation refreshed");
        });

        Self { state, _subscription: subscription }
    }

    /// Items currently shown.
    #[must_use]
    pub fn visible(&self) -> Vec<NavItem> {
        self.state.borrow().visible.clone()
    }

    /// Href of the visible top-level item matching the current route, if any.
    ///
    /// A child match highlights its parent group.
    #[must_use]
    pub fn active_href(&self) -> Option<&'static str> {
        let menu = self.state.borrow();
        menu.visible.iter().find(|item| item.contains(&menu.pathname)).map(|item| item.href)
    }

    #[must_use]
    pub fn pathname(&self) -> String {
        self.state.borrow().pathname.clone()
    }

    #[must_use]
    pub fn is_mobile_open(&self) -> bool {
        self.state.borrow().mobile_open
    }

    /// Open or close the mobile menu; returns the new open state.
    pub fn toggle_mobile(&self) -> bool {
        let mut menu = self.state.borrow_mut();
        menu.mobile_open = !menu.mobile_open;
        menu.mobile_open
    }

    /// Navigate to `href`. Following any link closes the mobile menu.
    pub fn follow(&self, href: &str) {
        let mut menu = self.state.borrow_mut();
        menu.pathname = href.to_owned();
        menu.mobile_open = false;
    }
}
