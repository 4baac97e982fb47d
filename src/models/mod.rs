pub mod campaign_events;
pub mod campaigns;
pub mod event_logs;
pub mod events;
pub mod referees;
pub mod referrer_campaigns;
pub mod referrers;
pub mod rewards;
