//! CSS and security headers for the landing page.
//!
//! The stylesheet is inlined into `<head>` so the first paint needs no
//! extra request. Visibility of the floating controls is driven by the
//! `hidden` attribute, which the browser runtime toggles.

/// Complete CSS for the page.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #0b1220;
    --bg-raised: #121b2e;
    --bg-card: #18233b;
    --text: #e6ebf5;
    --text-dim: #9aa6bd;
    --accent: #5b8def;
    --accent-soft: rgba(91, 141, 239, 0.16);
    --border: rgba(255, 255, 255, 0.08);
    --radius: 14px;
    --nav-height: 72px;
    --font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }
img { max-width: 100%; user-select: none; }
button { font: inherit; color: inherit; cursor: pointer; }

[hidden] { display: none !important; }

/* Navigation */

.main-nav {
    height: var(--nav-height);
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 clamp(16px, 4vw, 48px);
    border-bottom: 1px solid var(--border);
    background: var(--bg);
}

.nav-logo img { height: 36px; width: auto; display: block; }

.nav-links {
    display: flex;
    align-items: center;
    gap: 28px;
    margin: 0;
    padding: 0;
    list-style: none;
}

.nav-link {
    color: var(--text-dim);
    font-weight: 500;
    transition: color 0.15s ease;
}

.nav-link:hover,
.nav-link.is-current { color: var(--text); }

.desktop-only { display: flex; }
.mobile-only { display: none; }

@media (max-width: 767px) {
    .desktop-only { display: none; }
    .mobile-only { display: flex; }
}

/* Language switcher */

.lang-switcher { position: relative; }

.lang-switcher > summary {
    list-style: none;
    display: flex;
    align-items: center;
    gap: 6px;
    padding: 6px 10px;
    border: 1px solid var(--border);
    border-radius: 999px;
    cursor: pointer;
}

.lang-switcher > summary::-webkit-details-marker { display: none; }

.lang-menu {
    position: absolute;
    right: 0;
    top: calc(100% + 8px);
    min-width: 180px;
    margin: 0;
    padding: 6px;
    display: flex;
    flex-direction: column;
    background: var(--bg-raised);
    border: 1px solid var(--border);
    border-radius: 10px;
    z-index: 30;
}

.lang-option {
    display: flex;
    align-items: center;
    gap: 10px;
    width: 100%;
    padding: 8px 10px;
    border: 0;
    border-radius: 8px;
    background: transparent;
    text-align: left;
}

.lang-option:hover,
.lang-option.is-selected { background: var(--accent-soft); }

.flag {
    display: inline-grid;
    place-items: center;
    min-width: 28px;
    height: 20px;
    border-radius: 4px;
    background: var(--bg-card);
    font-size: 11px;
    font-weight: 700;
    letter-spacing: 0.04em;
}

/* Mobile drawer */

.drawer-toggle {
    display: grid;
    gap: 5px;
    padding: 10px;
    border: 0;
    background: transparent;
}

.drawer-toggle span {
    display: block;
    width: 22px;
    height: 2px;
    background: var(--text);
}

.nav-drawer {
    position: fixed;
    inset: 0 0 0 auto;
    width: min(320px, 85vw);
    padding: calc(var(--nav-height) + 16px) 24px 24px;
    background: var(--bg-raised);
    border-left: 1px solid var(--border);
    z-index: 40;
}

.nav-drawer ul {
    margin: 0;
    padding: 0;
    list-style: none;
    display: grid;
    gap: 18px;
    font-size: 18px;
}

.drawer-close {
    position: absolute;
    top: 20px;
    right: 20px;
    border: 0;
    background: transparent;
}

/* Sections */

.page-section {
    position: relative;
    min-height: 100vh;
    padding: clamp(64px, 10vh, 120px) clamp(16px, 6vw, 96px);
    border-bottom: 1px solid var(--border);
}

.section-title {
    margin: 0 0 24px;
    font-size: clamp(28px, 4vw, 44px);
    line-height: 1.15;
}

.section-lead { color: var(--text-dim); max-width: 760px; }

.hero {
    display: grid;
    place-items: center;
    text-align: center;
    min-height: calc(100vh - var(--nav-height));
}

.hero-title {
    margin: 0;
    font-size: clamp(48px, 10vw, 120px);
    letter-spacing: -0.03em;
}

.hero-motto { color: var(--text-dim); font-size: clamp(18px, 2.4vw, 26px); }

.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 24px;
    margin-top: 32px;
}

.card {
    padding: 24px;
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: var(--radius);
}

.card h3 { margin-top: 0; }
.card ul { padding-left: 20px; color: var(--text-dim); }

/* Tabs */

.tab-bar {
    display: inline-flex;
    gap: 4px;
    padding: 4px;
    margin-bottom: 32px;
    background: var(--bg-raised);
    border-radius: 999px;
}

.tab-bar button {
    padding: 8px 18px;
    border: 0;
    border-radius: 999px;
    background: transparent;
    color: var(--text-dim);
}

.tab-bar button.active { background: var(--accent); color: #fff; }

.tab-content { display: none; }
.tab-content.active { display: block; }

.team-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 24px;
}

.member img {
    width: 100%;
    aspect-ratio: 1;
    object-fit: cover;
    border-radius: var(--radius);
}

.member-role { color: var(--accent); font-weight: 600; margin: 4px 0 8px; }

/* Versions carousel */

.versions { margin-top: 48px; }

.versions-frame {
    display: flex;
    align-items: center;
    gap: 12px;
}

.versions-strip {
    display: flex;
    gap: 32px;
    flex: 1;
    overflow-x: auto;
    scroll-snap-type: x mandatory;
    scrollbar-width: none;
    padding: 12px 0;
}

.versions-strip::-webkit-scrollbar { display: none; }

.version-card {
    flex: 0 0 80%;
    scroll-snap-align: center;
    padding: 28px;
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    transition: opacity 0.25s ease, transform 0.25s ease, border-color 0.25s ease;
}

@media (min-width: 768px) {
    .version-card { flex-basis: 45%; }
}

.version-card.is-active { border-color: var(--accent); transform: scale(1); opacity: 1; }
.version-card.is-muted { opacity: 0.45; transform: scale(0.94); }

.version-label {
    display: inline-block;
    padding: 2px 10px;
    border-radius: 999px;
    background: var(--accent-soft);
    color: var(--accent);
    font-size: 13px;
    font-weight: 600;
}

.carousel-arrow {
    flex: 0 0 auto;
    display: grid;
    place-items: center;
    width: 44px;
    height: 44px;
    border: 1px solid var(--border);
    border-radius: 50%;
    background: var(--bg-raised);
}

/* Contact and footer */

.contact-links {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    margin-top: 24px;
}

.contact-link {
    display: inline-flex;
    align-items: center;
    gap: 10px;
    padding: 12px 18px;
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: 999px;
}

.site-footer {
    padding: 32px clamp(16px, 6vw, 96px);
    color: var(--text-dim);
    font-size: 14px;
    display: flex;
    flex-wrap: wrap;
    gap: 12px;
}

/* Floating controls */

.jump-arrow {
    position: absolute;
    left: 50%;
    bottom: 24px;
    transform: translateX(-50%);
    display: grid;
    place-items: center;
    width: 48px;
    height: 48px;
    border: 1px solid var(--border);
    border-radius: 50%;
    background: var(--bg-raised);
    animation: nudge 2s ease-in-out infinite;
}

@keyframes nudge {
    0%, 100% { transform: translate(-50%, 0); }
    50% { transform: translate(-50%, 6px); }
}

.scroll-top {
    position: fixed;
    right: 24px;
    bottom: 24px;
    display: grid;
    place-items: center;
    width: 48px;
    height: 48px;
    border: 0;
    border-radius: 50%;
    background: var(--accent);
    color: #fff;
    z-index: 20;
}

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
    .jump-arrow { animation: none; }
    .version-card { transition: none; }
}
"#;

/// Content Security Policy for the page.
///
/// Team photos come from the upload CDN; the WASM runtime needs
/// `wasm-unsafe-eval` to instantiate.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https://utfs.io; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'; connect-src 'self'; font-src 'self' data:; form-action 'self';";
