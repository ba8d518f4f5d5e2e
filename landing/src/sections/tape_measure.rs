use leptos::prelude::*;

/// Numbered ticks drawn on a tape `length` px long, one every 10px.
pub fn tick_count(length: u32) -> u32 {
    length / 10
}

/// Read-out shown while the tape is extended (10px to the foot, rounded).
pub fn feet_label(length: u32) -> String {
    format!("{} ft", length / 10 + u32::from(length % 10 >= 5))
}

/// Decorative tape measure. Extends while `active` is set.
#[component]
pub fn TapeMeasure(
    #[prop(into)] active: Signal<bool>,
    #[prop(default = 100)] length: u32,
) -> impl IntoView {
    view! {
        <div class="tape-wrap">
            <div
                class=move || if active.get() { "tape active" } else { "tape" }
                style=format!("width: {length}px")
            >
                <div class="tape-ticks">
                    {(1..=tick_count(length))
                        .map(|n| view! { <div class="tape-tick">{n}</div> })
                        .collect_view()}
                </div>
                <div class="tape-end"></div>
            </div>
            <Show when=move || active.get()>
                <div class="tape-readout">{feet_label(length)}</div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_tick_per_ten_pixels() {
        assert_eq!(tick_count(300), 30);
        assert_eq!(tick_count(100), 10);
        assert_eq!(tick_count(95), 9);
        assert_eq!(tick_count(5), 0);
    }

    #[test]
    fn feet_label_rounds_half_up() {
        assert_eq!(feet_label(300), "30 ft");
        assert_eq!(feet_label(94), "9 ft");
        assert_eq!(feet_label(95), "10 ft");
        assert_eq!(feet_label(0), "0 ft");
    }

    #[test]
    fn feet_label_handles_the_widest_tape() {
        assert_eq!(feet_label(u32::MAX), "429496730 ft");
        assert_eq!(feet_label(u32::MAX - 1), "429496729 ft");
        assert_eq!(feet_label(u32::MAX - 5), "429496729 ft");
    }
}
