use std::io::{self, BufRead, Write};
use std::time::Duration;

use super::{BRAND, Prompter};

/// Shows the splash for `duration`, then returns. A zero duration skips it.
pub async fn show<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    referring_firm: &str,
    duration: Duration,
) -> io::Result<()> {
    if duration.is_zero() {
        return Ok(());
    }

    prompter.say(BRAND)?;
    prompter.say(format!("Referrals from {referring_firm}"))?;
    prompter.say("")?;

    let spinner = prompter.spinner("Loading...");
    tokio::time::sleep(duration).await;
    spinner.finish_and_clear();
    Ok(())
}
