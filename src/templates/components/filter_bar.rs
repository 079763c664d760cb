use crate::domain::filters::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};
use crate::domain::{BrandFilter, FilterConfig, SortKey};
use maud::{html, Markup};

pub struct FilterBarVm<'a> {
    pub brands: &'a [String],
    pub config: &'a FilterConfig,
    pub shown: usize,
    pub total: usize,
}

pub fn filter_bar(vm: &FilterBarVm) -> Markup {
    let config = vm.config;
    let query = config.to_query();

    html! {
        section class="filter-bar" {
            form method="get" action="/" class="filters" {
                div class="search" {
                    input
                        type="search"
                        name="q"
                        value=(config.search_text)
                        placeholder="Buscar por marca, modelo o versión...";
                }

                span class="stats" {
                    "Mostrando " strong { (vm.shown) } " de " (vm.total) " vehículos"
                }

                div class="row" {
                    select name="brand" {
                        option value="all" selected[config.brand == BrandFilter::All] { "Todas las marcas" }
                        @for brand in vm.brands {
                            option value=(brand) selected[config.brand.as_str() == brand.as_str()] { (brand) }
                        }
                    }

                    input
                        type="number"
                        name="min"
                        placeholder="Min €"
                        value=(price_input(config.price_min, DEFAULT_PRICE_MIN));
                    span class="muted" { "-" }
                    input
                        type="number"
                        name="max"
                        placeholder="Max €"
                        value=(price_input(config.price_max, DEFAULT_PRICE_MAX));

                    select name="sort" {
                        @if config.sort_key == SortKey::Unsorted {
                            option value=(SortKey::Unsorted.as_str()) selected { "Orden del archivo" }
                        }
                        @for (key, label) in SortKey::CHOICES {
                            option value=(key.as_str()) selected[config.sort_key == key] { (label) }
                        }
                    }

                    button type="submit" class="primary" { "Aplicar" }
                    @if !config.is_default() {
                        a href="/" class="button" { "Limpiar" }
                    }
                    a href=(format!("/export?{query}")) class="button" { "Exportar XLSX" }
                }
            }

            form method="post" action="/catalog/clear" class="new-file" {
                button type="submit" class="primary" { "Nuevo XML" }
            }
        }
    }
}

/// Default bounds render as an empty input.
fn price_input(value: f64, default: f64) -> String {
    if value == default {
        String::new()
    } else {
        value.to_string()
    }
}
