pub mod favourite_repo;

pub use favourite_repo::FavouriteRepository;
