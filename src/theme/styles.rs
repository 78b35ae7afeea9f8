//! Global CSS styles for Plaquer.
//!
//! Parchment-and-ink heritage aesthetic. Layout switching between the
//! desktop header and the compact bottom bar is driven from Rust via the
//! viewport classifier, so the stylesheet carries no breakpoint media
//! queries of its own.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PARCHMENT (Backgrounds) */
  --parchment: #f7f3e8;
  --parchment-dark: #efe7d6;
  --parchment-border: #ddd2ba;

  /* INK (Text) */
  --ink: #2b2b2b;
  --ink-soft: rgba(43, 43, 43, 0.72);
  --ink-muted: rgba(43, 43, 43, 0.5);

  /* PLAQUE COLOURS */
  --plaque-blue: #1f62a8;
  --plaque-green: #2f7d5d;
  --plaque-brown: #7b4a21;
  --plaque-black: #232323;
  --plaque-grey: #6b7280;

  /* ACCENT */
  --gold: #b9892e;
  --gold-soft: rgba(185, 137, 46, 0.25);

  /* SEMANTIC */
  --danger: #b3362b;
  --warning: #c77d1f;

  /* Typography */
  --font-serif: 'Iowan Old Style', 'Palatino Linotype', Georgia, serif;
  --font-sans: 'Avenir Next', 'Segoe UI', Helvetica, Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--parchment);
  color: var(--ink);
  font-family: var(--font-sans);
  font-size: 16px;
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

button {
  font-family: inherit;
  cursor: pointer;
  border: none;
  background: none;
  color: inherit;
}

a {
  color: var(--plaque-blue);
  text-decoration: none;
}

/* === Page Frame === */
.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 1.5rem 1.25rem 6rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 600;
  margin-bottom: 0.25rem;
}

.page-subtitle {
  color: var(--ink-soft);
  margin-bottom: 1.5rem;
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  margin: 2rem 0 0.75rem;
}

.empty-state {
  padding: 3rem 1rem;
  text-align: center;
  color: var(--ink-muted);
}

/* === Navigation Header (desktop) === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 40;
  background: var(--parchment);
  border-bottom: 1px solid var(--parchment-border);
}

.nav-header-inner {
  max-width: 1100px;
  margin: 0 auto;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.6rem 1.25rem;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.6rem;
}

.app-title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 600;
  letter-spacing: 0.02em;
}

.nav-links {
  display: flex;
  gap: 0.4rem;
}

.nav-link {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.45rem 0.9rem;
  border-radius: 999px;
  color: var(--ink-soft);
  font-size: var(--text-sm);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-link:hover {
  background: var(--parchment-dark);
  color: var(--ink);
}

.nav-link.active {
  background: var(--plaque-blue);
  color: #fff;
}

.nav-status {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-xs);
  color: var(--ink-muted);
}

.status-dot {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: var(--plaque-green);
}

.status-dot.offline {
  background: var(--danger);
}

/* === Mobile Bottom Navigation === */
.mobile-nav {
  position: fixed;
  left: 0;
  right: 0;
  bottom: 0;
  z-index: 40;
  display: flex;
  justify-content: space-around;
  align-items: center;
  background: var(--parchment);
  border-top: 1px solid var(--parchment-border);
}

.mobile-nav-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2px;
  flex: 1;
  color: var(--ink-muted);
  font-size: var(--text-xs);
}

.mobile-nav-item.active {
  color: var(--plaque-blue);
}

/* === Offline Banner === */
.offline-banner {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  background: var(--warning);
  color: #fff;
  font-size: var(--text-sm);
  padding: 0.4rem 1rem;
}

/* === Discover Toolbar === */
.discover-toolbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.layout-toggle {
  display: flex;
  gap: 0.25rem;
  background: var(--parchment-dark);
  border-radius: 8px;
  padding: 3px;
}

.layout-toggle button {
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 6px;
  padding: 0 0.6rem;
  color: var(--ink-muted);
}

.layout-toggle button.active {
  background: var(--parchment);
  color: var(--ink);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.12);
}

/* === Plaque Cards === */
.plaque-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1rem;
}

.plaque-list {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.plaque-card {
  display: flex;
  gap: 0.8rem;
  align-items: flex-start;
  background: #fff;
  border: 1px solid var(--parchment-border);
  border-radius: 10px;
  padding: 0.9rem;
  cursor: pointer;
  transition: box-shadow var(--transition-fast), transform var(--transition-fast);
}

.plaque-card:hover {
  box-shadow: 0 2px 10px rgba(43, 43, 43, 0.12);
  transform: translateY(-1px);
}

.plaque-card.grid {
  flex-direction: column;
}

.colour-disc {
  width: 34px;
  height: 34px;
  border-radius: 50%;
  border: 2px solid rgba(255, 255, 255, 0.7);
  box-shadow: 0 0 0 1px var(--parchment-border);
  flex-shrink: 0;
}

.plaque-card-body {
  flex: 1;
  min-width: 0;
}

.plaque-card-title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 600;
}

.plaque-card-meta {
  color: var(--ink-muted);
  font-size: var(--text-xs);
  margin-top: 2px;
}

.collect-button {
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  color: var(--ink-muted);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.collect-button:hover {
  background: var(--parchment-dark);
}

.collect-button.collected {
  color: var(--gold);
}

/* === Modal Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 60;
  background: rgba(43, 43, 43, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.modal-panel {
  background: var(--parchment);
  border-radius: 12px;
  max-width: 560px;
  width: 100%;
  max-height: 85vh;
  overflow-y: auto;
  padding: 1.5rem;
  box-shadow: 0 12px 40px rgba(0, 0, 0, 0.3);
}

.modal-header {
  display: flex;
  justify-content: flex-end;
  margin-bottom: 0.25rem;
}

.modal-close {
  color: var(--ink-muted);
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
}

.modal-close:hover {
  background: var(--parchment-dark);
}

.modal-actions {
  display: flex;
  gap: 0.6rem;
  margin-top: 1.25rem;
  flex-wrap: wrap;
}

.modal-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  margin-bottom: 0.5rem;
}

.modal-description {
  color: var(--ink-soft);
  margin-bottom: 1rem;
}

/* === Plaque Article === */
.plaque-article-header {
  display: flex;
  align-items: center;
  gap: 0.8rem;
  margin-bottom: 0.75rem;
}

.plaque-article-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 600;
}

.plaque-article-meta {
  color: var(--ink-muted);
  font-size: var(--text-sm);
}

.plaque-inscription {
  background: #fff;
  border: 1px solid var(--parchment-border);
  border-radius: 10px;
  padding: 1rem 1.25rem;
  font-family: var(--font-serif);
  font-size: var(--text-lg);
}

.plaque-inscription p + p {
  margin-top: 0.6rem;
}

.plaque-coordinates {
  margin-top: 0.6rem;
  color: var(--ink-muted);
  font-size: var(--text-xs);
}

/* === Buttons === */
.btn-primary {
  background: var(--plaque-blue);
  color: #fff;
  border-radius: 8px;
  padding: 0.55rem 1.1rem;
  font-size: var(--text-sm);
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  transition: filter var(--transition-fast);
}

.btn-primary:hover {
  filter: brightness(1.08);
}

.btn-secondary {
  background: var(--parchment-dark);
  color: var(--ink);
  border-radius: 8px;
  padding: 0.55rem 1.1rem;
  font-size: var(--text-sm);
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
}

.btn-danger {
  background: var(--danger);
  color: #fff;
  border-radius: 8px;
  padding: 0.55rem 1.1rem;
  font-size: var(--text-sm);
}

.btn-back {
  display: inline-flex;
  align-items: center;
  gap: 0.3rem;
  color: var(--ink-soft);
  font-size: var(--text-sm);
  margin-bottom: 1rem;
}

/* === Share Panel === */
.share-panel {
  margin-top: 1.25rem;
  border-top: 1px solid var(--parchment-border);
  padding-top: 1rem;
}

.share-location {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  background: #fff;
  border: 1px solid var(--parchment-border);
  border-radius: 8px;
  padding: 0.5rem 0.75rem;
  font-size: var(--text-sm);
  overflow-wrap: anywhere;
}

.qr-code-container {
  display: flex;
  justify-content: center;
  margin-top: 0.75rem;
}

.qr-code-image {
  border-radius: 8px;
  border: 1px solid var(--parchment-border);
}

.copy-feedback {
  color: var(--plaque-green);
  font-size: var(--text-xs);
  margin-top: 0.4rem;
}

/* === Confirm Dialog === */
.confirm-dialog {
  background: var(--parchment);
  border-radius: 12px;
  max-width: 380px;
  width: 100%;
  padding: 1.5rem;
  box-shadow: 0 12px 40px rgba(0, 0, 0, 0.3);
}

/* === Map View === */
.map-canvas {
  position: relative;
  height: 70vh;
  min-height: 380px;
  background:
    linear-gradient(rgba(31, 98, 168, 0.06) 1px, transparent 1px),
    linear-gradient(90deg, rgba(31, 98, 168, 0.06) 1px, transparent 1px),
    var(--parchment-dark);
  background-size: 40px 40px, 40px 40px, auto;
  border: 1px solid var(--parchment-border);
  border-radius: 12px;
  overflow: hidden;
}

.map-pin {
  position: absolute;
  transform: translate(-50%, -100%);
  display: flex;
  align-items: center;
  justify-content: center;
  color: #fff;
  border-radius: 50% 50% 50% 0;
  rotate: -45deg;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.25);
  transition: transform var(--transition-fast);
}

.map-pin:hover {
  transform: translate(-50%, -100%) scale(1.12);
}

.map-pin-glyph {
  rotate: 45deg;
  font-size: var(--text-xs);
  font-weight: 700;
}

.map-legend {
  display: flex;
  gap: 1rem;
  margin-top: 0.75rem;
  font-size: var(--text-xs);
  color: var(--ink-soft);
  flex-wrap: wrap;
}

.map-legend-item {
  display: flex;
  align-items: center;
  gap: 0.35rem;
}

.map-legend-swatch {
  width: 12px;
  height: 12px;
  border-radius: 50%;
}

/* === Library === */
.library-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  background: #fff;
  border: 1px solid var(--parchment-border);
  border-radius: 10px;
  padding: 0.9rem 1.1rem;
  margin-bottom: 0.6rem;
}

.library-row-name {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
}

.library-row-meta {
  color: var(--ink-muted);
  font-size: var(--text-xs);
}

/* === Route Stops === */
.route-stop {
  display: flex;
  gap: 0.8rem;
  align-items: center;
  margin-bottom: 0.6rem;
}

.route-stop-number {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 28px;
  height: 28px;
  border-radius: 50%;
  background: var(--plaque-blue);
  color: #fff;
  font-size: var(--text-xs);
  font-weight: 700;
  flex-shrink: 0;
}

.route-stop .plaque-card {
  flex: 1;
}
"#;
