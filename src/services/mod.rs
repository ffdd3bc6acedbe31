//! Business logic services

pub mod authors;
pub mod books;

use std::sync::Arc;

use crate::repository::{AuthorStore, BookStore, Repository};

pub use authors::AuthorService;
pub use books::{AuthorLookup, BookService};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: AuthorService,
    pub books: BookService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self::from_stores(Arc::new(repository.authors), Arc::new(repository.books))
    }

    /// Wire services over explicit store implementations. Production goes
    /// through [`Services::new`]; tests supply doubles here.
    pub fn from_stores(authors: Arc<dyn AuthorStore>, books: Arc<dyn BookStore>) -> Self {
        let author_service = AuthorService::new(authors);
        let book_service = BookService::new(books, Arc::new(author_service.clone()));
        Self {
            authors: author_service,
            books: book_service,
        }
    }
}
