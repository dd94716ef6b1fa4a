pub mod application {
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
        pub mod search;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod fallback;
        pub mod model;
        pub mod repository;
        pub mod sample_catalog;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod search;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
