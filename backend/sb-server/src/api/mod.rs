pub mod error;
pub mod extractors;
pub mod message_response;

pub mod auth {
    pub mod auth;
    pub mod login_request;
    pub mod register_request;
    pub mod token_response;
}

pub mod crowds {
    pub mod crowd_query;
    pub mod crowds;
}

pub mod matches {
    pub mod matches;
    pub mod stadium_matches_response;
}

pub mod notifications {
    pub mod notifications;
    pub mod register_push_token_request;
}

pub mod schedules {
    pub mod create_schedule_request;
    pub mod create_schedule_response;
    pub mod schedule_dto;
    pub mod schedule_list_response;
    pub mod schedules;
}

pub mod stadiums {
    pub mod stadiums;
}

pub mod traffic {
    pub mod traffic;
    pub mod traffic_query;
    pub mod traffic_response;
}

pub mod weather {
    pub mod weather;
    pub mod weather_query;
    pub mod weather_response;
}
