//! Example bot that reacts to polls. Runnable as:
//!
//! ```sh
//! cargo run --example poll_echo -- BOT_TOKEN
//! ```
//!
//! Whenever a message containing a poll arrives, the bot replies with a
//! summary of the poll and, if it can, re-publishes it as a reply.

use std::env;

use botgram_client::{Bot, SendPollError};
use botgram_client::types::{Message, Poll};

async fn handle_poll_message(bot: &Bot, message: &Message, poll: &Poll) {
    let summary = format!(
        "poll {}: {:?} with {} option(s), {} vote(s) so far",
        poll.id(),
        poll.question(),
        poll.options().len(),
        poll.votes_count(),
    );
    if let Err(e) = bot.reply(message, summary).await {
        log::error!("failed to reply: {}", e);
        return;
    }

    match bot.reply_with_poll(message, poll).await {
        Ok(_) => {}
        Err(SendPollError::Unsupported(e)) => {
            log::info!("not re-publishing: {}", e);
        }
        Err(e) => log::error!("failed to re-publish poll: {}", e),
    }
}

async fn async_main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let token = env::args().nth(1).expect("token missing");
    let bot = Bot::new(token);

    let me = bot.get_me().await?;
    log::info!("logged in as @{}", me.username.as_deref().unwrap_or("?"));

    let mut offset = None;
    loop {
        for update in bot.get_updates(offset, 30).await? {
            offset = Some(update.update_id + 1);
            if let Some(message) = &update.message {
                if let Some(poll) = &message.poll {
                    handle_poll_message(&bot, message, poll).await;
                }
            }
            if let Some(poll) = &update.poll {
                log::info!("poll {} now has {} vote(s)", poll.id(), poll.votes_count());
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    async_main().await
}
