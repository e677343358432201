use crate::StoreTimeouts;
use anyhow::{anyhow, Result};
use barbershop_domain::ID;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};
use serde::{de::DeserializeOwned, Serialize};
use std::{future::Future, time::Duration};
use tracing::error;

/// Persistence shape of a domain entity `E`
pub trait MongoDocument<E>: Serialize + DeserializeOwned {
    /// Domain type used to create new documents
    type New;
    /// Domain type describing a partial update
    type Patch;

    fn to_domain(self) -> Result<E>;
    fn from_new(new: &Self::New) -> Self;
    /// Fields to `$set` for the given patch. Only fields present in the
    /// patch are included.
    fn set_document(patch: &Self::Patch) -> Document;
}

fn get_id_filter(oid: &ObjectId) -> Document {
    doc! {
        "_id": *oid
    }
}

/// Reads the store assigned `_id` of a stored document
pub fn stored_id(oid: Option<ObjectId>) -> Result<ID> {
    oid.map(ID::from)
        .ok_or_else(|| anyhow!("Stored document is missing its _id"))
}

fn persistence_to_entity<E, D: MongoDocument<E>>(doc: Document) -> Result<E> {
    let raw: D = bson::from_document(doc)?;
    raw.to_domain()
}

/// Runs a store operation and fails it when it does not complete in time
async fn bounded<T, F>(limit: Duration, operation: F) -> Result<T>
where
    F: Future<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(Ok(res)) => Ok(res),
        Ok(Err(e)) => {
            error!("Store operation failed: {:?}", e);
            Err(anyhow::Error::new(e))
        }
        Err(_) => {
            error!("Store operation did not complete within {:?}", limit);
            Err(anyhow!(
                "Store operation did not complete within {:?}",
                limit
            ))
        }
    }
}

pub async fn insert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    new: &D::New,
    limit: Duration,
) -> Result<ID> {
    let doc = bson::to_document(&D::from_new(new))?;
    let res = bounded(limit, collection.insert_one(doc, None)).await?;
    res.inserted_id
        .as_object_id()
        .map(ID::from)
        .ok_or_else(|| anyhow!("Store assigned a non ObjectId _id: {}", res.inserted_id))
}

pub async fn find<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &ObjectId,
    limit: Duration,
) -> Result<Option<E>> {
    let filter = get_id_filter(id);
    let doc = bounded(limit, collection.find_one(filter, None)).await?;
    doc.map(persistence_to_entity::<E, D>).transpose()
}

/// Unfiltered scan in the natural order of the collection
pub async fn find_all<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    limit: Duration,
) -> Result<Vec<E>> {
    let documents = bounded(limit, async {
        let cursor = collection.find(doc! {}, None).await?;
        cursor.try_collect::<Vec<_>>().await
    })
    .await?;

    documents
        .into_iter()
        .map(persistence_to_entity::<E, D>)
        .collect()
}

/// Sets the fields present in `patch` and returns the document as it is
/// after the update, or `None` if no document has the given id
pub async fn update<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &ObjectId,
    patch: &D::Patch,
    timeouts: StoreTimeouts,
) -> Result<Option<E>> {
    let set = D::set_document(patch);
    if set.is_empty() {
        // `$set` must not be empty
        return find::<E, D>(collection, id, timeouts.lookup).await;
    }

    let options = FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build();
    let doc = bounded(
        timeouts.operation,
        collection.find_one_and_update(get_id_filter(id), doc! { "$set": set }, options),
    )
    .await?;
    doc.map(persistence_to_entity::<E, D>).transpose()
}

/// Removing an id that does not exist is not an error
pub async fn delete(
    collection: &Collection<Document>,
    id: &ObjectId,
    limit: Duration,
) -> Result<()> {
    let filter = get_id_filter(id);
    bounded(limit, collection.delete_one(filter, None))
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{pending, ready};

    #[tokio::test(start_paused = true)]
    async fn operations_fail_when_the_store_does_not_answer_in_time() {
        let res = bounded(
            Duration::from_secs(5),
            pending::<mongodb::error::Result<()>>(),
        )
        .await;
        assert!(res.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn operations_within_the_limit_succeed() {
        let res = bounded(
            Duration::from_secs(5),
            ready(Ok::<_, mongodb::error::Error>(7)),
        )
        .await;
        assert_eq!(res.unwrap(), 7);
    }
}
