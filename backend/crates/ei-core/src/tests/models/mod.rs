mod status_change;
mod tier;
mod user_record;
