use crate::domain::FileInfo;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, file_info: Option<&FileInfo>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    div class="brand" {
                        // car icon
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="32"
                            height="32"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#dc2626"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path d="M19 17h2c.6 0 1-.4 1-1v-3c0-.9-.7-1.7-1.5-1.9C18.7 10.6 16 10 16 10s-1.3-1.4-2.2-2.3c-.5-.4-1.1-.7-1.8-.7H5c-.6 0-1.1.4-1.4.9l-1.4 2.9A3.7 3.7 0 0 0 2 12v4c0 .6.4 1 1 1h2" {}
                            circle cx="7" cy="17" r="2" {}
                            path d="M9 17h6" {}
                            circle cx="17" cy="17" r="2" {}
                        }
                        div {
                            h1 { "Santander Consumer Renting" }
                            p class="subtitle" { "Catálogo de Vehículos" }
                        }
                    }

                    @if let Some(info) = file_info {
                        div class="file-info" {
                            p class="count" { (info.vehicle_count) " vehículos" }
                            p class="name" { (info.name) }
                            p class="loaded-at" { (info.loaded_at.format("%d/%m/%Y %H:%M:%S")) }
                        }
                    }
                }
                (content)
            }
        }
    }
}
