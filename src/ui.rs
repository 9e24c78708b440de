use crate::habit::FULL_DASH_ARRAY;
use crate::models::{DashboardView, View};

pub fn render_page(view: &View, invalid: bool) -> String {
    let body = match view {
        View::Onboarding => render_onboarding(invalid),
        View::Dashboard(dashboard) => render_dashboard(dashboard),
    };
    PAGE_HTML.replace("{{BODY}}", &body)
}

fn render_onboarding(invalid: bool) -> String {
    ONBOARDING_HTML.replace("{{SHAKE}}", if invalid { " shake" } else { "" })
}

fn render_dashboard(view: &DashboardView) -> String {
    let pulse = if view.status_pulse { " pulse" } else { "" };
    let disabled = if view.check_in_enabled { "" } else { " disabled" };
    let overlay = if view.overlay_visible { "" } else { " hidden" };

    DASHBOARD_HTML
        .replace("{{CURRENT_DAY}}", &view.current_day)
        .replace("{{TOTAL_DAYS}}", &view.total_days)
        .replace("{{MONEY}}", &view.money.to_string())
        .replace("{{TONE}}", view.status_tone)
        .replace("{{PULSE}}", pulse)
        .replace("{{STATUS}}", view.status_text)
        .replace("{{DISABLED}}", disabled)
        .replace("{{BTN_TEXT}}", view.button_text)
        .replace("{{BTN_SUBTEXT}}", view.button_subtext)
        .replace("{{RING_COLOR}}", view.ring_color)
        .replace("{{RING_OFFSET}}", &view.ring_dash_offset.to_string())
        .replace("{{DASH_ARRAY}}", &FULL_DASH_ARRAY.to_string())
        .replace("{{OVERLAY}}", overlay)
        .replace("{{HABIT}}", &escape_html(&view.habit_name))
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Stake</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Courier+Prime&family=DM+Mono&display=swap');

    :root {
      --bg: #000000;
      --ink: #ffffff;
      --accent: #ff0033;
      --dim: #333333;
      --safe: #00ff00;
      --warning: #ffff00;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Courier Prime", "DM Mono", "Space Mono", monospace;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .card {
      width: min(420px, 100%);
      border: 1px solid var(--dim);
      border-radius: 2px;
      padding: 32px;
      display: grid;
      gap: 24px;
      position: relative;
    }

    .fields {
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: 1.1rem;
      letter-spacing: 0.3em;
      text-transform: uppercase;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.7rem;
      letter-spacing: 0.2em;
      text-transform: uppercase;
      color: #999999;
    }

    input {
      background: transparent;
      border: none;
      border-bottom: 1px solid var(--dim);
      color: var(--ink);
      font: inherit;
      font-size: 1.1rem;
      padding: 8px 0;
    }

    input:focus {
      outline: none;
      border-bottom-color: var(--ink);
    }

    button {
      appearance: none;
      background: transparent;
      color: var(--ink);
      border: 1px solid var(--dim);
      border-radius: 0;
      font: inherit;
      letter-spacing: 0.2em;
      text-transform: uppercase;
      padding: 14px 18px;
      cursor: pointer;
      width: 100%;
    }

    button:hover:not(:disabled) {
      border-color: var(--ink);
    }

    button:disabled {
      opacity: 0.8;
      cursor: default;
    }

    .status {
      display: flex;
      align-items: center;
      gap: 8px;
      font-size: 10px;
      letter-spacing: 0.3em;
      text-transform: uppercase;
    }

    .dot {
      width: 6px;
      height: 6px;
      border-radius: 999px;
    }

    .tone-warning { color: var(--warning); }
    .tone-warning .dot { background: var(--warning); }
    .tone-safe { color: var(--safe); }
    .tone-safe .dot { background: var(--safe); }
    .tone-danger { color: var(--accent); }
    .tone-danger .dot { background: var(--accent); }

    .pulse .dot {
      animation: pulse 1.2s ease-in-out infinite;
    }

    .counter {
      display: flex;
      justify-content: space-between;
      font-size: 0.8rem;
      letter-spacing: 0.2em;
    }

    .ring {
      position: relative;
      width: 220px;
      height: 220px;
      margin: 0 auto;
    }

    .ring svg {
      width: 100%;
      height: 100%;
      transform: rotate(-90deg);
    }

    .ring .track {
      fill: none;
      stroke: var(--dim);
      stroke-width: 4;
    }

    .ring .fill {
      fill: none;
      stroke-width: 4;
      transition: stroke-dashoffset 600ms ease, stroke 600ms ease;
    }

    .money {
      position: absolute;
      inset: 0;
      display: grid;
      place-items: center;
      font-size: 2.6rem;
    }

    .btn-sub {
      display: block;
      font-size: 0.65rem;
      color: #999999;
      margin-top: 4px;
    }

    .overlay {
      position: absolute;
      inset: 0;
      background: rgba(0, 0, 0, 0.92);
      display: grid;
      place-items: center;
      align-content: center;
      gap: 16px;
      color: var(--accent);
      letter-spacing: 0.3em;
      text-transform: uppercase;
      padding: 32px;
    }

    .hidden {
      display: none;
    }

    .shake {
      animation: shake 250ms ease-in-out;
    }

    @keyframes pulse {
      0%, 100% { opacity: 1; }
      50% { opacity: 0.3; }
    }

    @keyframes shake {
      0%, 100% { transform: translateX(0); }
      20%, 60% { transform: translateX(-5px); }
      40%, 80% { transform: translateX(5px); }
    }
  </style>
</head>
<body>
{{BODY}}
</body>
</html>
"#;

const ONBOARDING_HTML: &str = r#"  <main id="onboarding" class="card{{SHAKE}}">
    <h1>Commit</h1>
    <form method="post" action="/start">
      <div class="fields">
        <label>Habit
          <input id="habit-name" name="habit_name" type="text" autocomplete="off" />
        </label>
        <label>Stake
          <input id="stake-amount" name="stake_amount" type="number" min="1" />
        </label>
        <label>Days
          <input id="total-days" name="total_days" type="number" min="1" />
        </label>
        <button id="start-btn" type="submit">Lock it in</button>
      </div>
    </form>
  </main>
"#;

const DASHBOARD_HTML: &str = r#"  <main id="dashboard" class="card">
    <div class="status tone-{{TONE}}{{PULSE}}">
      <span id="status-dot" class="dot"></span>
      <span id="status-text">{{STATUS}}</span>
    </div>
    <h1>{{HABIT}}</h1>
    <div class="counter">
      <span>DAY <span id="current-day-display">{{CURRENT_DAY}}</span></span>
      <span>OF <span id="total-days-display">{{TOTAL_DAYS}}</span></span>
    </div>
    <div class="ring">
      <svg viewBox="0 0 100 100" aria-hidden="true">
        <circle class="track" cx="50" cy="50" r="45" />
        <circle id="battery-ring" class="fill" cx="50" cy="50" r="45"
          style="stroke: {{RING_COLOR}}; stroke-dasharray: {{DASH_ARRAY}}; stroke-dashoffset: {{RING_OFFSET}};" />
      </svg>
      <div class="money">$<span id="money-display">{{MONEY}}</span></div>
    </div>
    <form method="post" action="/check-in">
      <button id="check-in-btn" type="submit"{{DISABLED}}>
        <span id="btn-text">{{BTN_TEXT}}</span>
        <span id="btn-subtext" class="btn-sub">{{BTN_SUBTEXT}}</span>
      </button>
    </form>
    <div id="forfeit-overlay" class="overlay{{OVERLAY}}">
      <span>Stake forfeited</span>
      <form method="post" action="/reset">
        <button type="submit">Start over</button>
      </form>
    </div>
    <form method="post" action="/reset">
      <button id="reset-btn" type="submit">Reset</button>
    </form>
  </main>
"#;
