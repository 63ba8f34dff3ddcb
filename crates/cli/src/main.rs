// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use gigbook::{ChangeEvent, ChangeFeed, SessionController};
use gigbook_client::{GigService, HttpGigService};
use gigbook_domain::{AvailabilityStatus, Gig, Phase, Role, can_set_assigned_directly};
use std::str::FromStr;
use std::time::Duration;
use time::Date;
use time::macros::format_description;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

/// gigbook - command-line client for the gig booking coordinator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the gigbook server
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Role to act under: manager or gent
    #[arg(long, default_value = "manager")]
    role: String,

    /// Gent to act as (gent role) or inspect (manager role)
    #[arg(long)]
    gent_id: Option<i64>,

    #[command(subcommand)]
    command: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// List all gents
    Gents,
    /// List gigs visible to the session
    Gigs,
    /// Show one gig
    Show {
        /// The gig identifier
        id: i64,
    },
    /// Show availability rows for a gig
    Availability {
        /// The gig identifier
        id: i64,
    },
    /// Create a gig from a draft
    Create {
        /// Gig title
        #[arg(long, default_value = "New Gig")]
        title: String,
        /// Calendar day, yyyy-MM-dd (defaults to today, UTC)
        #[arg(long)]
        date: Option<String>,
        /// Fee as a decimal currency amount
        #[arg(long, default_value_t = 0.0)]
        fee: f64,
        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,
        /// Gent ids to seed the assignment set with
        #[arg(long = "gent", value_delimiter = ',')]
        gents: Vec<i64>,
    },
    /// Update fields of an existing gig
    Update {
        /// The gig identifier
        id: i64,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New calendar day, yyyy-MM-dd
        #[arg(long)]
        date: Option<String>,
        /// New fee
        #[arg(long)]
        fee: Option<f64>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
        /// Replace the assigned gent set (comma separated ids)
        #[arg(long = "gents", value_delimiter = ',')]
        gents: Option<Vec<i64>>,
    },
    /// Set a gig's phase
    SetPhase {
        /// The gig identifier
        id: i64,
        /// planning, booked, or completed
        phase: String,
    },
    /// Set a gent's availability on a gig
    SetAvailability {
        /// The gig identifier
        gig: i64,
        /// The gent identifier
        gent: i64,
        /// no_reply, available, unavailable, or assigned
        status: String,
    },
    /// Delete a gig
    Delete {
        /// The gig identifier
        id: i64,
    },
    /// Keep the gig list fresh, refreshing on each change notification
    Watch {
        /// Poll interval in seconds
        #[arg(long, default_value_t = 10)]
        interval_secs: u64,
    },
}

fn parse_date(value: &str) -> Result<Date, Box<dyn std::error::Error>> {
    let format = format_description!("[year]-[month]-[day]");
    Ok(Date::parse(value, &format)?)
}

fn print_gig_row(gig: &Gig) {
    let id: String = gig.id.map_or_else(|| String::from("draft"), |id| id.to_string());
    println!(
        "{id:>6}  {}  {:<9}  {:>10.2}  {}  [{}]",
        gig.date,
        gig.phase,
        gig.fee,
        gig.title,
        gig.gent_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join(", ")
    );
}

fn print_gig_detail(gig: &Gig) {
    print_gig_row(gig);
    if !gig.notes.is_empty() {
        println!("        notes: {}", gig.notes);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let role: Role = Role::from_str(&args.role)?;
    let service: HttpGigService = HttpGigService::new(&args.base_url);
    let mut controller = SessionController::new(service.clone(), role);

    controller.set_gent(args.gent_id);
    controller.load_initial().await;

    match args.command {
        Action::Gents => {
            for gent in &controller.session().gents {
                let username: &str = gent.username.as_deref().unwrap_or("-");
                println!("{:>6}  {:<24}  {username}", gent.id, gent.name);
            }
        }
        Action::Gigs => {
            for gig in &controller.session().gigs {
                print_gig_row(gig);
            }
        }
        Action::Show { id } => {
            let gig: Gig = service.get_gig(id).await?;
            print_gig_detail(&gig);
        }
        Action::Availability { id } => {
            for entry in controller.load_availability(id).await {
                let name: String = controller
                    .session()
                    .gent_name(entry.gent_id)
                    .map_or_else(|| format!("gent {}", entry.gent_id), ToString::to_string);
                println!("{:>6}  {:<24}  {}", entry.gent_id, name, entry.status);
            }
        }
        Action::Create {
            title,
            date,
            fee,
            notes,
            gents,
        } => {
            let mut draft: Gig = controller.make_draft(None);
            draft.title = title;
            if let Some(value) = date {
                draft.date = parse_date(&value)?;
            }
            draft.fee = fee;
            draft.notes = notes;
            if !gents.is_empty() {
                draft.gent_ids = gents;
            }
            let created: Gig = controller.create_gig(&draft).await?;
            info!(id = ?created.id, "Created gig");
            print_gig_detail(&created);
        }
        Action::Update {
            id,
            title,
            date,
            fee,
            notes,
            gents,
        } => {
            let mut gig: Gig = controller
                .session()
                .gigs
                .iter()
                .find(|g| g.id == Some(id))
                .cloned()
                .ok_or_else(|| format!("gig {id} not found"))?;
            if let Some(value) = title {
                gig.title = value;
            }
            if let Some(value) = date {
                gig.date = parse_date(&value)?;
            }
            if let Some(value) = fee {
                gig.fee = value;
            }
            if let Some(value) = notes {
                gig.notes = value;
            }
            if let Some(value) = gents {
                if !can_set_assigned_directly(gig.phase) {
                    return Err(
                        "assignment is derived from availability while a gig is in planning; \
                         use set-availability instead"
                            .into(),
                    );
                }
                gig.gent_ids = value;
            }
            let updated: Gig = controller.save_gig(&gig).await?;
            print_gig_detail(&updated);
        }
        Action::SetPhase { id, phase } => {
            let phase: Phase = Phase::from_str(&phase)?;
            let updated: Gig = controller.set_phase(id, phase).await?;
            print_gig_detail(&updated);
        }
        Action::SetAvailability { gig, gent, status } => {
            let status: AvailabilityStatus = AvailabilityStatus::from_str(&status)?;
            controller.update_availability(gig, gent, status).await?;
            for entry in &controller.session().availability {
                println!("{:>6}  {}", entry.gent_id, entry.status);
            }
        }
        Action::Delete { id } => {
            controller.delete_gig(id).await?;
            info!(id, "Deleted gig");
        }
        Action::Watch { interval_secs } => {
            watch(&mut controller, interval_secs).await;
        }
    }

    Ok(())
}

/// Refreshes the session on every change notification and prints the
/// list whenever it differs from the last one shown.
///
/// The companion server's WebSocket channel would publish into the same
/// feed; without one, an interval ticker stands in as the notification
/// source.
async fn watch(controller: &mut SessionController<HttpGigService>, interval_secs: u64) {
    let feed: ChangeFeed = ChangeFeed::new();
    let mut rx = feed.subscribe();

    let interval: Duration = Duration::from_secs(interval_secs.max(1));
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            feed.notify(ChangeEvent::GigsChanged);
        }
    });

    let mut last_shown: Vec<Gig> = controller.session().gigs.clone();
    for gig in &last_shown {
        print_gig_row(gig);
    }

    loop {
        match rx.recv().await {
            Ok(ChangeEvent::GigsChanged) | Err(RecvError::Lagged(_)) => {
                if let Err(err) = controller.refresh_gigs().await {
                    warn!(%err, "Refresh failed; will retry on next notification");
                    continue;
                }
                if controller.session().gigs != last_shown {
                    last_shown = controller.session().gigs.clone();
                    println!("--- {} gig(s) ---", last_shown.len());
                    for gig in &last_shown {
                        print_gig_row(gig);
                    }
                }
            }
            Err(RecvError::Closed) => break,
        }
    }
}
