// presenter/listener.rs

use crate::presenter::command_handler::{handle_command, Outcome};
use crate::presenter::Session;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

/// Reads command lines until `/quit` or end of input, one at a time.
pub async fn listen_for_commands<R, W>(
    session: &mut Session,
    reader: R,
    mut writer: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match handle_command(&line, session) {
            Outcome::Reply(text) if text.is_empty() => {}
            Outcome::Reply(text) => {
                writer.write_all(text.as_bytes()).await?;
                if !text.ends_with('\n') {
                    writer.write_all(b"\n").await?;
                }
                writer.flush().await?;
            }
            Outcome::Quit => {
                info!("Quit requested");
                break;
            }
        }
    }
    info!("Listener ended.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PricingSheet;
    use crate::config::AppConfig;
    use serde_json::json;

    #[tokio::test]
    async fn processes_lines_in_order_until_quit() {
        let mut sheet = PricingSheet::new("R$");
        sheet.load(&[json!({ "codigo": 5, "descricao": "Jarra", "custo": "10" })]);
        let mut session = Session::new(sheet, AppConfig::default());

        let input: &[u8] = b"/cost 5 20\n\n/mult 5 5\n/quit\n/cost 5 1\n";
        let mut output = Vec::new();
        listen_for_commands(&mut session, input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "5 → R$ 50.99\n5 → R$ 100.99\n");
        assert_eq!(session.sheet.catalog().get(5).unwrap().cost, Some(20.0));
    }

    #[tokio::test]
    async fn end_of_input_ends_session() {
        let mut session = Session::new(PricingSheet::new("R$"), AppConfig::default());
        let input: &[u8] = b"/status\n";
        let mut output = Vec::new();
        listen_for_commands(&mut session, input, &mut output).await.unwrap();
        assert!(String::from_utf8(output).unwrap().contains("Catalog is empty"));
    }
}
