//! The widget stylesheet, injected once at mount.
//!
//! Every themeable value is a `--cc-*` custom property on the root, so
//! settings application is a pure property-set operation and never rebuilds
//! the tree. State (hidden, minimized, dark, animations) is class-driven.

pub const STYLESHEET: &str = r#"
.cc-widget {
  --cc-primary: #4f46e5;
  --cc-primary-text: #ffffff;
  --cc-bg: #ffffff;
  --cc-text: #1f2937;
  --cc-header-bg: var(--cc-primary);
  --cc-header-text: #ffffff;
  --cc-user-bubble: var(--cc-primary);
  --cc-user-bubble-text: #ffffff;
  --cc-assistant-bubble: #f3f4f6;
  --cc-assistant-bubble-text: #1f2937;
  --cc-font-family: system-ui, -apple-system, sans-serif;
  --cc-font-size: 14px;
  --cc-top: auto;
  --cc-right: 24px;
  --cc-bottom: 24px;
  --cc-left: auto;
  --cc-z: 2147483000;
  --cc-width: 360px;
  --cc-height: 520px;
  --cc-radius: 16px;
  --cc-launcher-size: 56px;
  position: fixed;
  top: var(--cc-top);
  right: var(--cc-right);
  bottom: var(--cc-bottom);
  left: var(--cc-left);
  z-index: var(--cc-z);
  font-family: var(--cc-font-family);
  font-size: var(--cc-font-size);
  color: var(--cc-text);
}
.cc-widget .cc-hidden { display: none !important; }

.cc-launcher {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 8px;
  min-width: var(--cc-launcher-size);
  height: var(--cc-launcher-size);
  padding: 0 4px;
  border: none;
  border-radius: 50%;
  background: var(--cc-primary);
  color: var(--cc-primary-text);
  font-size: calc(var(--cc-launcher-size) * 0.45);
  cursor: pointer;
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.2);
  overflow: hidden;
}
.cc-launcher.cc-shape-circle { border-radius: 50%; }
.cc-launcher.cc-shape-rounded { border-radius: 16px; }
.cc-launcher.cc-shape-square { border-radius: 4px; }
.cc-launcher-icon img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}
.cc-launcher-label {
  font-size: var(--cc-font-size);
  padding-right: 8px;
  white-space: nowrap;
}
.cc-unread-badge {
  position: absolute;
  top: 2px;
  right: 2px;
  min-width: 18px;
  height: 18px;
  border-radius: 9px;
  background: #ef4444;
  color: #ffffff;
  font-size: 11px;
  line-height: 18px;
  text-align: center;
}
.cc-prompt-bubble {
  position: absolute;
  bottom: calc(var(--cc-launcher-size) + 12px);
  right: 0;
  max-width: 220px;
  padding: 10px 14px;
  border-radius: 12px;
  background: var(--cc-bg);
  color: var(--cc-text);
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.15);
}

.cc-panel {
  display: flex;
  flex-direction: column;
  width: var(--cc-width);
  height: var(--cc-height);
  max-height: 80vh;
  border-radius: var(--cc-radius);
  background: var(--cc-bg);
  box-shadow: 0 8px 32px rgba(0, 0, 0, 0.25);
  overflow: hidden;
}
.cc-panel.cc-minimized { height: 56px; }

.cc-header {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 12px 16px;
  background: var(--cc-header-bg);
  color: var(--cc-header-text);
}
.cc-header-avatar {
  width: 32px;
  height: 32px;
  border-radius: 50%;
  object-fit: cover;
}
.cc-header-title { font-weight: 600; flex: 1; }
.cc-header-subtitle { font-size: 12px; opacity: 0.85; }
.cc-header-btn {
  border: none;
  background: transparent;
  color: inherit;
  font-size: 16px;
  cursor: pointer;
  padding: 2px 6px;
}

.cc-messages {
  flex: 1;
  overflow-y: auto;
  padding: 12px;
  display: flex;
  flex-direction: column;
  gap: 8px;
}
.cc-msg {
  max-width: 80%;
  padding: 8px 12px;
  border-radius: 12px;
  white-space: pre-wrap;
  word-break: break-word;
}
.cc-msg-user {
  align-self: flex-end;
  background: var(--cc-user-bubble);
  color: var(--cc-user-bubble-text);
}
.cc-msg-assistant {
  align-self: flex-start;
  background: var(--cc-assistant-bubble);
  color: var(--cc-assistant-bubble-text);
}

.cc-typing, .cc-loading {
  padding: 4px 16px;
  color: var(--cc-text);
  opacity: 0.6;
  letter-spacing: 3px;
  animation: cc-pulse 1.2s ease-in-out infinite;
}

.cc-input-row {
  display: flex;
  gap: 8px;
  padding: 10px 12px;
  border-top: 1px solid rgba(0, 0, 0, 0.08);
}
.cc-input {
  flex: 1;
  border: 1px solid rgba(0, 0, 0, 0.15);
  border-radius: 8px;
  padding: 8px 10px;
  font: inherit;
  color: inherit;
  background: var(--cc-bg);
}
.cc-input.cc-blink { caret-color: var(--cc-primary); }
.cc-send, .cc-contact-submit {
  border: none;
  border-radius: 8px;
  padding: 8px 14px;
  background: var(--cc-primary);
  color: var(--cc-primary-text);
  font: inherit;
  cursor: pointer;
}
.cc-send:disabled, .cc-input:disabled { opacity: 0.5; cursor: default; }

.cc-contact-form {
  display: flex;
  flex-direction: column;
  gap: 8px;
  padding: 10px 12px;
  border-top: 1px solid rgba(0, 0, 0, 0.08);
}
.cc-contact-input {
  border: 1px solid rgba(0, 0, 0, 0.15);
  border-radius: 8px;
  padding: 8px 10px;
  font: inherit;
}
.cc-contact-hint { color: #ef4444; font-size: 12px; }

.cc-widget.cc-dark {
  --cc-bg: #1f2937;
  --cc-text: #f9fafb;
  --cc-assistant-bubble: #374151;
  --cc-assistant-bubble-text: #f9fafb;
}
.cc-widget.cc-high-contrast .cc-launcher,
.cc-widget.cc-high-contrast .cc-panel {
  outline: 2px solid currentColor;
}
.cc-widget.cc-focus-outline :focus-visible {
  outline: 3px solid var(--cc-primary);
  outline-offset: 2px;
}

/* Attention animations, applied to the launcher. */
@keyframes cc-bounce {
  0%, 100% { transform: translateY(0); }
  30% { transform: translateY(-10px); }
  60% { transform: translateY(-4px); }
}
@keyframes cc-pulse {
  0%, 100% { transform: scale(1); opacity: 1; }
  50% { transform: scale(1.08); opacity: 0.85; }
}
@keyframes cc-shake {
  0%, 100% { transform: translateX(0); }
  20%, 60% { transform: translateX(-4px); }
  40%, 80% { transform: translateX(4px); }
}
@keyframes cc-wobble {
  0%, 100% { transform: rotate(0); }
  25% { transform: rotate(-6deg); }
  75% { transform: rotate(6deg); }
}
.cc-anim-bounce { animation: cc-bounce 1s ease-in-out infinite; }
.cc-anim-pulse { animation: cc-pulse 2s ease-in-out infinite; }
.cc-anim-shake { animation: cc-shake 0.8s ease-in-out infinite; }
.cc-anim-wobble { animation: cc-wobble 1s ease-in-out infinite; }

/* Entry and open transitions. */
@keyframes cc-fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
@keyframes cc-slide-up {
  from { opacity: 0; transform: translateY(16px); }
  to { opacity: 1; transform: translateY(0); }
}
@keyframes cc-scale-in {
  from { opacity: 0; transform: scale(0.9); }
  to { opacity: 1; transform: scale(1); }
}
.cc-entry-fade-in { animation: cc-fade-in 0.5s ease-out; }
.cc-entry-slide-up { animation: cc-slide-up 0.5s ease-out; }
.cc-entry-pop { animation: cc-scale-in 0.35s ease-out; }
.cc-open-fade { animation: cc-fade-in 0.25s ease-out; }
.cc-open-slide-up { animation: cc-slide-up 0.3s ease-out; }
.cc-open-scale { animation: cc-scale-in 0.25s ease-out; }

@keyframes cc-ripple {
  from { box-shadow: 0 0 0 0 rgba(79, 70, 229, 0.45); }
  to { box-shadow: 0 0 0 16px rgba(79, 70, 229, 0); }
}
.cc-rippling { animation: cc-ripple 0.6s ease-out; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::TREE;

    #[test]
    fn stylesheet_covers_blueprint_classes() {
        for spec in TREE {
            for class in spec.class.split_whitespace() {
                assert!(
                    STYLESHEET.contains(&format!(".{class}")),
                    "missing style for {class}"
                );
            }
        }
    }
}
