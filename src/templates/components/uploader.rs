use maud::{html, Markup, PreEscaped};

const UPLOAD_SCRIPT: &str = r#"
document.getElementById('feed-file').addEventListener('change', async (event) => {
  const file = event.target.files[0];
  if (!file) return;
  document.getElementById('upload-status').hidden = false;
  await fetch('/upload?name=' + encodeURIComponent(file.name), {
    method: 'POST',
    headers: { 'Content-Type': 'text/xml' },
    body: file,
  });
  window.location.href = '/';
});
"#;

pub fn uploader(error: Option<&str>, can_fetch: bool) -> Markup {
    html! {
        section class="uploader" {
            div class="uploader-card" {
                h2 { "Cargar Catálogo XML" }
                p class="muted" { "Seleccione el archivo XML del catálogo Motorflash" }

                label class="dropzone" for="feed-file" {
                    p { "Haga clic para elegir el archivo XML" }
                    p class="hint" { "Formato: XML de Motorflash API" }
                    input type="file" id="feed-file" accept=".xml,text/xml" hidden;
                }

                p id="upload-status" class="muted" hidden { "Procesando XML..." }

                @if can_fetch {
                    form method="post" action="/fetch" class="fetch-form" {
                        button type="submit" class="primary" { "Descargar catálogo en línea" }
                    }
                }

                @if let Some(message) = error {
                    div class="alert" role="alert" { p { (message) } }
                }
            }
        }
        script { (PreEscaped(UPLOAD_SCRIPT)) }
    }
}
