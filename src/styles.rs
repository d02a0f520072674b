//! CSS for the landing page.
//!
//! The whole stylesheet ships as one constant inlined into the rendered
//! document, so the output file is self-contained.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use henneth_landing::styles::PAGE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```
//!
//! Layout notes:
//!
//! - The nav row is hidden below 768px and shown at or above it. There is
//!   no alternate narrow-viewport menu.
//! - The hero stacks its text column (`z-index:10`) above the beams layer
//!   (`z-index:0`).
//! - Animations (CTA border spin, beam drift) are pure CSS keyframes and
//!   run on the compositor clock, independent of rendering.

/// Complete CSS for the page.
pub const PAGE_CSS: &str = r#"
:root{--bg:#0a0a0a;--panel:#0f172a;--text:#e5e5e5;--muted:#737373;--accent:#6366f1;}
*{box-sizing:border-box;}
body{margin:0;background:var(--bg);color:var(--text);font-family:system-ui,-apple-system,Segoe UI,Helvetica,Arial,sans-serif;line-height:1.5;}
.nav{width:100%;padding:16px 24px;border-bottom:1px solid rgba(255,255,255,0.08);}
.nav-row{display:none;}
@media (min-width:768px){.nav-row{display:flex;align-items:center;justify-content:center;gap:48px;}}
.nav-group{display:flex;align-items:center;gap:32px;list-style:none;margin:0;padding:0;}
.nav-link{color:var(--muted);text-decoration:none;font-size:15px;transition:color .15s ease;}
.nav-link:hover{color:var(--text);}
.nav-brand{margin:0;font-size:22px;font-weight:700;letter-spacing:.2em;color:var(--text);}
.hero{position:relative;width:100%;height:40rem;display:flex;align-items:center;justify-content:center;overflow:hidden;background:var(--bg);}
.hero-content{position:relative;z-index:10;display:flex;flex-direction:column;gap:16px;width:100%;max-width:42rem;padding:0 24px;text-align:center;}
.hero-title{margin:0;font-size:clamp(2rem,6vw,4rem);font-weight:700;background:linear-gradient(to bottom,#fff,#a3a3a3);-webkit-background-clip:text;background-clip:text;color:transparent;}
.hero-input{width:100%;padding:12px 16px;border-radius:8px;border:1px solid rgba(255,255,255,0.15);background:rgba(255,255,255,0.04);color:var(--text);font-size:15px;outline:none;}
.hero-input::placeholder{color:var(--muted);}
.hero-input:focus{border-color:var(--accent);}
.hero-cta{position:relative;display:inline-flex;width:100%;height:48px;padding:1px;border:none;border-radius:9999px;overflow:hidden;background:transparent;cursor:pointer;}
.hero-cta-spin{position:absolute;inset:-1000%;background:conic-gradient(from 90deg at 50% 50%,#e2cbff 0%,#393bb2 50%,#e2cbff 100%);animation:cta-spin 2s linear infinite;}
.hero-cta-label{position:relative;display:inline-flex;height:100%;width:100%;align-items:center;justify-content:center;border-radius:9999px;background:var(--panel);color:#fff;font-size:15px;font-weight:500;}
@keyframes cta-spin{to{transform:rotate(360deg);}}
.hero-caption{margin:0;color:var(--muted);font-size:14px;}
.beams{position:absolute;inset:0;z-index:0;pointer-events:none;}
.beams svg{width:100%;height:100%;}
.beam{fill:none;stroke-width:0.6;opacity:.45;stroke-dasharray:160 1200;animation:beam-drift 9s linear infinite;}
.beam-indigo{stroke:#6366f1;}
.beam-cyan{stroke:#22d3ee;}
@keyframes beam-drift{to{stroke-dashoffset:-1360;}}
"#;
