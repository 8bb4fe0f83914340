//! CSS styles for the rating page.
//!
//! The stylesheet targets the BEM class names emitted by
//! [`crate::components`]. The mobile breakpoint matches the 620px threshold
//! below which the rating cell shows a single star.
//!
//! # Customization
//!
//! ```rust
//! use ranktable_report::styles::RATING_CSS;
//!
//! let my_css = ".rating-table__row { background: #fff; }";
//! let combined = format!("{}\n{}", RATING_CSS, my_css);
//! assert!(combined.contains("rating-table__row"));
//! ```

/// Complete CSS for the rating page.
pub const RATING_CSS: &str = r#"
:root {
    --bg-page: #f4f5f9;
    --bg-card: #ffffff;
    --text-main: #262f56;
    --text-muted: #7a819c;
    --border-subtle: #e6e8f0;
    --accent: #3a58f5;
    --accent-warm: #f3bb44;
    --badge-green: #1f9d55;
    --badge-red: #d64545;
    --badge-violet: #7c3aed;
    --font-main: 'Inter', 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--bg-page);
    color: var(--text-main);
    font-family: var(--font-main);
    font-size: 14px;
}

.rating {
    max-width: 1100px;
    margin: 0 auto;
    padding: 24px 16px;
}

.rating__title {
    font-size: 24px;
    margin: 0 0 16px;
}

/* Tabs */
.tabs__row {
    display: flex;
    gap: 4px;
    border-bottom: 1px solid var(--border-subtle);
    overflow-x: auto;
}

.tabs__cell--header {
    border: 0;
    background: transparent;
    color: var(--text-muted);
    padding: 10px 16px;
    font: inherit;
    cursor: pointer;
    border-bottom: 2px solid transparent;
    white-space: nowrap;
}

.tabs__cell--header.selected {
    color: var(--text-main);
    border-bottom-color: var(--accent);
    font-weight: 600;
}

/* Table */
.rating-table {
    width: 100%;
    border-collapse: separate;
    border-spacing: 0 8px;
}

.rating-table__row {
    background: var(--bg-card);
}

.rating-table__cell {
    padding: 12px 16px;
    vertical-align: middle;
}

.rating-table__cell--rating a {
    display: inline-flex;
    align-items: center;
    gap: 2px;
    color: inherit;
    text-decoration: none;
    font-weight: 600;
}

.rating-value {
    margin-left: 6px;
}

.bookmaker-name {
    position: relative;
}

.bookmaker-name::after {
    content: '';
    position: absolute;
    top: -12px;
    right: -8px;
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--accent-warm);
}

.bookmaker-name.after-none::after {
    display: none;
}

.reliability-badge {
    display: inline-block;
    padding: 2px 8px;
    border-radius: 10px;
    font-size: 12px;
    color: #fff;
    background: var(--text-muted);
}

.reliability-badge--no-deposit { background: var(--badge-green); }
.reliability-badge--no-bonus { background: var(--badge-red); }
.reliability-badge--exclusive { background: var(--badge-violet); }

.reliability-amount {
    display: flex;
    align-items: center;
    gap: 6px;
    margin-top: 4px;
    font-weight: 600;
}

.btn {
    display: inline-block;
    padding: 8px 14px;
    border-radius: 8px;
    text-decoration: none;
    font-weight: 600;
}

.btn--more {
    color: var(--accent);
    border: 1px solid var(--accent);
}

.btn--site {
    color: #fff;
    background: var(--accent);
    margin-left: 8px;
}

/* Placeholders */
.loading-message,
.no-data-message,
.error-message {
    padding: 32px 0;
    text-align: center;
    color: var(--text-muted);
}

.error-message {
    color: var(--badge-red);
}

@media (max-width: 619px) {
    .rating-table__cell {
        padding: 8px;
    }

    .btn--site {
        margin-left: 0;
        margin-top: 4px;
    }

    .rating-table__cell--links {
        display: flex;
        flex-direction: column;
    }
}
"#;
