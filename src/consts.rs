//! Shared constants: DOM hooks, class names, user-facing text, and timing defaults.

// ── Theme ───────────────────────────────────────────────────────

/// Default `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "ll_theme";

/// Media query reporting the OS dark-mode preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class on the root element while the dark theme is active.
pub const DARK_CLASS: &str = "theme-dark";

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_ICON_SELECTOR: &str = "#theme-toggle .theme-icon";

/// Transient class on the theme toggle while its icon animates.
pub const ICON_CHANGING_CLASS: &str = "changing";

/// Delay before the icon markup is replaced.
pub const ICON_SWAP_DELAY_MS: u32 = 40;

/// How long the `changing` class is held after the markup swap.
pub const ICON_SWAP_HOLD_MS: u32 = 340;

// ── Navigation ──────────────────────────────────────────────────

pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "main-navigation";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_OPEN_CLASS: &str = "is-open";
pub const NAV_LABEL_OPEN: &str = "Abrir menú";
pub const NAV_LABEL_CLOSE: &str = "Cerrar menú";

/// Viewport width above which an open menu closes itself.
pub const NAV_BREAKPOINT_PX: f64 = 900.0;

/// Quiet period after the last resize event before the width is checked.
pub const RESIZE_DEBOUNCE_MS: u32 = 120;

// ── Smooth scroll ───────────────────────────────────────────────

pub const ANCHOR_LINK_SELECTOR: &str = "a.nav-link[href^=\"#\"]";
pub const HEADER_SELECTOR: &str = ".site-header";

/// Header height assumed when the sticky header is absent or unmeasured.
pub const FALLBACK_HEADER_PX: f64 = 72.0;

/// Extra gap kept between the header and the scrolled-to section.
pub const SCROLL_PADDING_PX: f64 = 8.0;

// ── Contact form ────────────────────────────────────────────────

pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_STATUS_ID: &str = "form-status";

/// Simulated submission latency.
pub const SUBMIT_DELAY_MS: u32 = 900;

pub const MSG_FORM_INVALID: &str = "Por favor completá los campos requeridos.";
pub const MSG_FORM_SENDING: &str = "Enviando...";
pub const MSG_FORM_SENT: &str = "Mensaje enviado. ¡Gracias!";

// ── Post dialog ─────────────────────────────────────────────────

pub const POST_ITEM_SELECTOR: &str = ".post-item";
pub const POST_LINK_SELECTOR: &str = ".post-link";
pub const PREFETCH_LINK_SELECTOR: &str = "a[data-prefetch]";
pub const POST_SLUG_ATTR: &str = "data-slug";
pub const POST_PATH_PREFIX: &str = "/blog/";

pub const DIALOG_ID: &str = "post-dialog";
pub const DIALOG_TITLE_ID: &str = "dialog-title";
pub const DIALOG_META_ID: &str = "dialog-meta";
pub const DIALOG_CONTENT_ID: &str = "dialog-content";
pub const DIALOG_REPO_ID: &str = "dialog-repo";
pub const DIALOG_CLOSE_ID: &str = "dialog-close";
pub const DIALOG_FOCUS_SELECTOR: &str = ".post-article";

pub const FRAGMENT_ARTICLE_SELECTOR: &str = "article.post";
pub const FRAGMENT_TITLE_SELECTOR: &str = "h1,h2";
pub const FRAGMENT_META_SELECTOR: &str = ".post-meta";
pub const FRAGMENT_BODY_SELECTOR: &str = ".post-body";
pub const FRAGMENT_REPO_SELECTOR: &str = "a[data-repo]";
pub const LINK_TITLE_SELECTOR: &str = ".post-title";
pub const LINK_META_SELECTOR: &str = ".post-meta";

pub const POST_DEFAULT_TITLE: &str = "Artículo";
pub const POST_UNAVAILABLE_TITLE: &str = "Artículo no disponible";
pub const POST_UNAVAILABLE_BODY: &str = "No se pudo cargar el contenido en este momento.";

/// Placeholder `href` for a repository link with no target.
pub const NO_REPO_HREF: &str = "#";

/// Elements reachable by Tab inside the dialog.
pub const FOCUSABLE_SELECTOR: &str = "a[href], button, input, textarea, [tabindex]:not([tabindex=\"-1\"])";

// ── Configuration ───────────────────────────────────────────────

/// `<meta name=...>` carrying the page's JSON configuration.
pub const CONFIG_META_SELECTOR: &str = "meta[name=\"portfolio-config\"]";
