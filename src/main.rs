use clap::Parser;

use config::Config;
use models::notification_payload::NotificationPayload;

mod api;
mod app;
mod channel;
mod config;
mod handlers;
mod log;
mod map;
mod models;
mod presenter;

#[cfg(test)]
mod tests;

/// A process launched by tapping a notification carries the payload fields
/// on its command line instead of the broadcast channel.
#[derive(Parser, Debug)]
#[command(version, about)]
struct LaunchArgs {
    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    body: Option<String>,

    #[arg(long)]
    longitude: Option<String>,

    #[arg(long)]
    latitude: Option<String>,
}

impl LaunchArgs {
    fn into_payload(self) -> Option<NotificationPayload> {
        if self.title.is_none()
            && self.body.is_none()
            && self.longitude.is_none()
            && self.latitude.is_none()
        {
            return None;
        }

        Some(NotificationPayload {
            title: self.title,
            body: self.body,
            longitude: self.longitude,
            latitude: self.latitude,
        })
    }
}

fn main() {
    let args = LaunchArgs::parse();
    let conf = Config::from_any().unwrap();

    // Setup simplelog
    log::setup(&conf.log);

    app::launch(&conf, args.into_payload());
}
