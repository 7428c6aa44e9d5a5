//! The `globals.css` template.
//!
//! Everything except the six color slots is constant across runs.

use super::ThemePalette;

/// Stylesheet template. `%NAME%` tokens are replaced by `render_globals_css`.
pub const TEMPLATE: &str = r#"@import "tailwindcss";
@import "tw-animate-css";

@custom-variant dark (&:is(.dark *));

@theme inline {
  --color-primary: var(--primary);
  --color-primary-foreground: var(--primary-foreground);
  --color-secondary: var(--secondary);
  --color-secondary-foreground: var(--secondary-foreground);
  --color-background: var(--background);
  --color-foreground: var(--foreground);
  --color-border: var(--border);
  --color-input: var(--input);
  --color-ring: var(--ring);
  --radius-sm: calc(var(--radius) - 4px);
  --radius-md: calc(var(--radius) - 2px);
  --radius-lg: var(--radius);
  --radius-xl: calc(var(--radius) + 4px);
}

:root {
  --primary: %PRIMARY%;
  --primary-light: %PRIMARY_LIGHT%;
  --primary-dark: %PRIMARY_DARK%;
  --primary-foreground: #ffffff;

  --secondary: %SECONDARY%;
  --secondary-light: %SECONDARY_LIGHT%;
  --secondary-dark: %SECONDARY_DARK%;
  --secondary-foreground: #ffffff;

  --background: #ffffff;
  --foreground: #020817;
  --border: #e2e8f0;
  --input: #e2e8f0;
  --ring: %PRIMARY%;
  --radius: 0.75rem;
}

body {
  margin: 0;
  font-family: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
  background-color: var(--background);
  color: var(--foreground);
}

html {
  min-height: 100%;
}

@layer base {
  * {
    border-color: var(--border);
  }

  body {
    min-height: 100vh;
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
  }
}

.bg-primary { background-color: var(--primary); }
.bg-primary-light { background-color: var(--primary-light); }
.bg-primary-dark { background-color: var(--primary-dark); }

.text-primary { color: var(--primary); }

.bg-secondary { background-color: var(--secondary); }
.bg-secondary-light { background-color: var(--secondary-light); }
.bg-secondary-dark { background-color: var(--secondary-dark); }

.text-secondary { color: var(--secondary); }
"#;

/// Render the full stylesheet for a palette.
pub fn render_globals_css(palette: &ThemePalette) -> String {
    palette
        .slots()
        .iter()
        .fold(TEMPLATE.to_string(), |css, (name, color)| {
            let token = format!("%{}%", name.replace('-', "_").to_uppercase());
            css.replace(&token, &color.to_css())
        })
}
