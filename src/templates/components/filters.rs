use maud::{html, Markup};

/// A fieldset of radio buttons sharing `name`; the first option is checked.
pub fn radio_group(legend: &str, name: &str, options: &[(&str, &str)]) -> Markup {
    html! {
        fieldset {
            legend { (legend) }
            @for (i, (value, label)) in options.iter().enumerate() {
                label {
                    input type="radio" name=(name) value=(value) checked[i == 0];
                    " " (label)
                }
                " "
            }
        }
    }
}

/// Numeric from/to inputs. `start` and `end` hold (element id, unit label)
/// pairs, one input per pair.
pub fn amount_range(legend: &str, start: &[(&str, &str)], end: &[(&str, &str)]) -> Markup {
    html! {
        fieldset class="amount-range" {
            legend { (legend) }
            @for (id, unit) in start {
                input type="number" min="0" id=(id);
                " " (unit) " "
            }
            " ~ "
            @for (id, unit) in end {
                input type="number" min="0" id=(id);
                " " (unit) " "
            }
        }
    }
}
