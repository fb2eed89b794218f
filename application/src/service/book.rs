use error_stack::Report;
use tracing::{debug, info};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{BookId, DestructBookSelection};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetAllBookDto, UpdateBookDto};

#[async_trait::async_trait]
pub trait GetAllBookService: 'static + Sync + Send + DependOnBookQuery {
    /// Filters the whole collection, then returns the `[offset, offset + limit)` slice
    /// in insertion order.
    async fn get_all_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let document = self.book_query().load(&mut connection).await?;
        connection.commit().await?;

        let DestructBookSelection {
            filter,
            page,
            limit,
        } = dto.selection.into_destruct();
        let offset = page.offset(&limit);
        let books = document
            .into_books()
            .into_iter()
            .filter(|book| filter.matches(book))
            .skip(offset)
            .take(*limit.as_ref())
            .map(BookDto::from)
            .collect::<Vec<_>>();
        debug!("Selected {} books from offset {offset}", books.len());
        Ok(books)
    }
}

impl<T> GetAllBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let mut document = self.book_query().load(&mut connection).await?;

        let book = dto.draft.into_book(BookId::generate());
        document.push(book.clone());

        self.book_modifier()
            .persist(&mut connection, &document)
            .await?;
        connection.commit().await?;

        info!("Created book {:?}", book.id());
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let mut document = self.book_query().load(&mut connection).await?;

        let id = BookId::new(dto.id);
        let book = document.find_mut(&id).ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable(format!("No book with id {id:?}"))
        })?;
        book.merge(dto.patch);
        let updated = book.clone();

        self.book_modifier()
            .persist(&mut connection, &document)
            .await?;
        connection.commit().await?;

        info!("Updated book {id:?}");
        Ok(BookDto::from(updated))
    }
}

impl<T> UpdateBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let mut document = self.book_query().load(&mut connection).await?;

        let id = BookId::new(dto.id);
        document.remove(&id).ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable(format!("No book with id {id:?}"))
        })?;

        self.book_modifier()
            .persist(&mut connection, &document)
            .await?;
        connection.commit().await?;

        info!("Deleted book {id:?}");
        Ok(())
    }
}

impl<T> DeleteBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use serde_json::json;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{BookQuery, DependOnBookQuery};
    use kernel::interface::update::{BookModifier, DependOnBookModifier};
    use kernel::prelude::entity::{BookDocument, BookDraft, BookId, BookPatch, BookSelection};
    use kernel::KernelError;

    use crate::service::{
        CreateBookService, DeleteBookService, GetAllBookService, UpdateBookService,
    };
    use crate::transfer::{CreateBookDto, DeleteBookDto, GetAllBookDto, UpdateBookDto};

    #[derive(Default)]
    struct MemoryDatabase {
        document: Mutex<BookDocument>,
        persisted: AtomicUsize,
    }

    struct MemoryTransaction;

    #[async_trait::async_trait]
    impl Transaction for MemoryTransaction {
        async fn commit(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl DatabaseConnection for MemoryDatabase {
        type Transaction = MemoryTransaction;
        async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
            Ok(MemoryTransaction)
        }
    }

    #[async_trait::async_trait]
    impl BookQuery for MemoryDatabase {
        type Transaction = MemoryTransaction;
        async fn load(
            &self,
            _con: &mut Self::Transaction,
        ) -> error_stack::Result<BookDocument, KernelError> {
            Ok(self.document.lock().unwrap().clone())
        }
    }

    #[async_trait::async_trait]
    impl BookModifier for MemoryDatabase {
        type Transaction = MemoryTransaction;
        async fn persist(
            &self,
            _con: &mut Self::Transaction,
            document: &BookDocument,
        ) -> error_stack::Result<(), KernelError> {
            *self.document.lock().unwrap() = document.clone();
            self.persisted.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    impl DependOnBookQuery for MemoryDatabase {
        type BookQuery = Self;
        fn book_query(&self) -> &Self::BookQuery {
            self
        }
    }

    impl DependOnBookModifier for MemoryDatabase {
        type BookModifier = Self;
        fn book_modifier(&self) -> &Self::BookModifier {
            self
        }
    }

    fn draft(title: &str, language: &str) -> BookDraft {
        let fields = json!({
            "author": "Someone",
            "country": "Somewhere",
            "imageLink": "images/cover.jpg",
            "language": language,
            "pages": 100,
            "title": title,
            "year": 1900
        });
        BookDraft::try_from_fields(fields.as_object().unwrap()).unwrap()
    }

    async fn seeded(count: usize) -> error_stack::Result<MemoryDatabase, KernelError> {
        let db = MemoryDatabase::default();
        for index in 0..count {
            let language = if index % 2 == 0 { "English" } else { "French" };
            db.create_book(CreateBookDto {
                draft: draft(&format!("Book {index}"), language),
            })
            .await?;
        }
        db.persisted.store(0, Ordering::SeqCst);
        Ok(db)
    }

    fn select(raw: &[(&str, &str)]) -> GetAllBookDto {
        let pairs = raw
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<Vec<_>>();
        GetAllBookDto {
            selection: BookSelection::from_query(&pairs).unwrap(),
        }
    }

    #[tokio::test]
    async fn list_defaults_to_first_ten() -> error_stack::Result<(), KernelError> {
        let db = seeded(12).await?;
        let books = db.get_all_books(select(&[])).await?;
        let titles = books.iter().map(|b| b.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles.len(), 10);
        assert_eq!(titles.first(), Some(&"Book 0"));
        assert_eq!(titles.last(), Some(&"Book 9"));
        assert_eq!(db.persisted.load(Ordering::SeqCst), 0);
        Ok(())
    }

    #[tokio::test]
    async fn list_pages_are_stable() -> error_stack::Result<(), KernelError> {
        let db = seeded(12).await?;
        let first = db
            .get_all_books(select(&[("page", "2"), ("limit", "5")]))
            .await?;
        let second = db
            .get_all_books(select(&[("page", "2"), ("limit", "5")]))
            .await?;
        assert_eq!(first, second);
        let titles = first.iter().map(|b| b.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, ["Book 5", "Book 6", "Book 7", "Book 8", "Book 9"]);

        let beyond = db
            .get_all_books(select(&[("page", "4"), ("limit", "5")]))
            .await?;
        assert!(beyond.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn list_filters_before_paginating() -> error_stack::Result<(), KernelError> {
        let db = seeded(12).await?;
        let french = db
            .get_all_books(select(&[("language", "French"), ("limit", "3"), ("page", "2")]))
            .await?;
        let titles = french.iter().map(|b| b.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, ["Book 7", "Book 9", "Book 11"]);

        let exact = db.get_all_books(select(&[("title", "Book 1")])).await?;
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].title, "Book 1");
        Ok(())
    }

    #[tokio::test]
    async fn create_appends_with_fresh_id() -> error_stack::Result<(), KernelError> {
        let db = seeded(3).await?;
        let created = db
            .create_book(CreateBookDto {
                draft: draft("Things Fall Apart", "English"),
            })
            .await?;

        assert_eq!(created.id.len(), 8);
        assert!(created.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(created.id, created.id.to_lowercase());
        assert_eq!(db.persisted.load(Ordering::SeqCst), 1);

        let document = db.document.lock().unwrap().clone();
        let last = document.books().last().unwrap();
        assert_eq!(last.id(), &BookId::new(created.id.clone()));
        let ids = document
            .books()
            .iter()
            .filter(|book| book.id() == last.id())
            .count();
        assert_eq!(ids, 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_merges_and_keeps_id() -> error_stack::Result<(), KernelError> {
        let db = seeded(3).await?;
        let target = db.get_all_books(select(&[])).await?.remove(1);

        let fields = json!({ "title": "Renamed", "year": "2001" });
        let updated = db
            .update_book(UpdateBookDto {
                id: target.id.clone(),
                patch: BookPatch::try_from_fields(fields.as_object().unwrap()).unwrap(),
            })
            .await?;

        assert_eq!(updated.id, target.id);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.year, 2001);
        assert_eq!(updated.author, target.author);
        assert_eq!(updated.pages, target.pages);

        let books = db.get_all_books(select(&[])).await?;
        assert_eq!(books[1], updated);
        assert_eq!(db.persisted.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() -> error_stack::Result<(), KernelError> {
        let db = seeded(2).await?;
        let fields = json!({ "title": "Nothing" });
        let report = db
            .update_book(UpdateBookDto {
                id: "ffffffff".to_string(),
                patch: BookPatch::try_from_fields(fields.as_object().unwrap()).unwrap(),
            })
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);
        assert_eq!(report.current_context().to_string(), "Book not found");
        assert_eq!(db.persisted.load(Ordering::SeqCst), 0);
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_one_and_keeps_order() -> error_stack::Result<(), KernelError> {
        let db = seeded(4).await?;
        let before = db.get_all_books(select(&[])).await?;
        let victim = before[1].id.clone();

        db.delete_book(DeleteBookDto { id: victim.clone() })
            .await?;

        let after = db.get_all_books(select(&[])).await?;
        assert_eq!(after.len(), before.len() - 1);
        assert!(after.iter().all(|book| book.id != victim));
        let expected = before
            .into_iter()
            .filter(|book| book.id != victim)
            .collect::<Vec<_>>();
        assert_eq!(after, expected);

        let report = db
            .delete_book(DeleteBookDto { id: victim })
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);
        assert_eq!(db.persisted.load(Ordering::SeqCst), 1);
        Ok(())
    }
}
