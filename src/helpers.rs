#[macro_export]
macro_rules! ticket_type {
    (ADULT) => {
        $crate::models::ticket::TicketType::Adult
    };
    (CHILD) => {
        $crate::models::ticket::TicketType::Child
    };
    (INFANT) => {
        $crate::models::ticket::TicketType::Infant
    };
}

/// Builds a batch of checked requests, `tickets![ADULT => 2, INFANT => 1]`.
#[macro_export]
macro_rules! tickets {
    ($($t:ident => $q:expr),* $(,)?) => {{
        let requests: ::std::vec::Vec<
            ::std::result::Result<
                $crate::models::ticket::TicketRequest,
                $crate::models::error::TypeValidationError,
            >,
        > = ::std::vec![$($crate::models::ticket::TicketRequest::new($crate::ticket_type!($t), $q)),*];
        requests
            .into_iter()
            .collect::<::std::result::Result<::std::vec::Vec<_>, _>>()
    }};
}
