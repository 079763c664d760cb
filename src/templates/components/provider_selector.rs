use crate::domain::{ProviderSelection, PROVIDERS};
use maud::{html, Markup};

pub fn provider_selector(selection: &ProviderSelection) -> Markup {
    html! {
        section class="providers" {
            h2 { "Choose Your Rental Provider" }
            p class="muted" { "Select from our trusted automotive partners to see available vehicles" }

            div class="provider-list" {
                @for provider in PROVIDERS {
                    @let selected = selection.contains(provider.id);
                    form method="post" action=(format!("/providers/{}/toggle", provider.id)) {
                        button.provider.selected[selected]
                            type="submit"
                            aria-pressed=(if selected { "true" } else { "false" })
                        {
                            @if selected { span class="check" { "✓" } }
                            strong { (provider.name) }
                            small { (provider.description) }
                        }
                    }
                }
            }

            @if !selection.is_empty() {
                p class="selected-count" {
                    "✓ " (selection.len()) " provider" @if selection.len() > 1 { "s" } " selected"
                }
            }
        }
    }
}
