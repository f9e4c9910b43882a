use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
    sea_query::{Expr, OnConflict, Query, extension::postgres::PgExpr},
};
use uuid::Uuid;

use platter_domain::pagination::PageRequest;
use platter_recipes_schema::{
    favorites, ingredients, recipe_ingredients, recipe_tags, recipes, shopping_cart_entries,
    subscriptions, tags, users,
};

use crate::domain::repository::{
    FavoriteRepository, IngredientRepository, NewRecipe, RecipeRepository, RecipeUpdate,
    ShoppingCartRepository, SubscriptionRepository, TagRepository, UserRepository,
};
use crate::domain::types::{
    CartIngredientRow, Ingredient, IngredientAmount, IngredientSpec, Recipe, RecipeQuery, Tag,
    User,
};
use crate::error::RecipesServiceError;

/// Escape LIKE wildcards so user input matches literally.
fn escape_like(query: &str) -> String {
    query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RecipesServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, RecipesServiceError> {
        let models = users::Entity::find()
            .filter(users::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .context("find users by ids")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RecipesServiceError> {
        let count = users::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count user by id")?;
        Ok(count > 0)
    }

    async fn email_or_username_taken(
        &self,
        email: &str,
        username: &str,
    ) -> Result<bool, RecipesServiceError> {
        let count = users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::Email.eq(email))
                    .add(users::Column::Username.eq(username)),
            )
            .count(&self.db)
            .await
            .context("count users by email or username")?;
        Ok(count > 0)
    }

    async fn create(&self, user: &User) -> Result<(), RecipesServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            username: Set(user.username.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        username: model.username,
        first_name: model.first_name,
        last_name: model.last_name,
        created_at: model.created_at,
    }
}

// ── Tag repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTagRepository {
    pub db: DatabaseConnection,
}

impl TagRepository for DbTagRepository {
    async fn list(&self) -> Result<Vec<Tag>, RecipesServiceError> {
        let models = tags::Entity::find()
            .order_by_asc(tags::Column::Id)
            .all(&self.db)
            .await
            .context("list tags")?;
        Ok(models.into_iter().map(tag_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, RecipesServiceError> {
        let model = tags::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find tag by id")?;
        Ok(model.map(tag_from_model))
    }

    async fn find_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, RecipesServiceError> {
        let found: Vec<i32> = tags::Entity::find()
            .filter(tags::Column::Id.is_in(ids.iter().copied()))
            .select_only()
            .column(tags::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .context("find existing tag ids")?;
        Ok(found)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, RecipesServiceError> {
        let count = tags::Entity::find()
            .filter(tags::Column::Slug.eq(slug))
            .count(&self.db)
            .await
            .context("count tags by slug")?;
        Ok(count > 0)
    }

    async fn create(
        &self,
        name: &str,
        color: &str,
        slug: &str,
    ) -> Result<Tag, RecipesServiceError> {
        let model = tags::ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
            color: Set(color.to_owned()),
            slug: Set(slug.to_owned()),
        }
        .insert(&self.db)
        .await
        .context("create tag")?;
        Ok(tag_from_model(model))
    }
}

fn tag_from_model(model: tags::Model) -> Tag {
    Tag {
        id: model.id,
        name: model.name,
        color: model.color,
        slug: model.slug,
    }
}

// ── Ingredient repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbIngredientRepository {
    pub db: DatabaseConnection,
}

impl IngredientRepository for DbIngredientRepository {
    async fn list(&self) -> Result<Vec<Ingredient>, RecipesServiceError> {
        let models = ingredients::Entity::find()
            .order_by_asc(ingredients::Column::Name)
            .all(&self.db)
            .await
            .context("list ingredients")?;
        Ok(models.into_iter().map(ingredient_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Ingredient>, RecipesServiceError> {
        let model = ingredients::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find ingredient by id")?;
        Ok(model.map(ingredient_from_model))
    }

    async fn search_prefix(&self, query: &str) -> Result<Vec<Ingredient>, RecipesServiceError> {
        let pattern = format!("{}%", escape_like(query));
        let models = ingredients::Entity::find()
            .filter(Expr::col(ingredients::Column::Name).ilike(pattern))
            .order_by_asc(ingredients::Column::Name)
            .all(&self.db)
            .await
            .context("search ingredients by prefix")?;
        Ok(models.into_iter().map(ingredient_from_model).collect())
    }

    async fn search_containing(
        &self,
        query: &str,
    ) -> Result<Vec<Ingredient>, RecipesServiceError> {
        let pattern = format!("%{}%", escape_like(query));
        let models = ingredients::Entity::find()
            .filter(Expr::col(ingredients::Column::Name).ilike(pattern))
            .order_by_asc(ingredients::Column::Name)
            .all(&self.db)
            .await
            .context("search ingredients by substring")?;
        Ok(models.into_iter().map(ingredient_from_model).collect())
    }

    async fn find_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, RecipesServiceError> {
        let found: Vec<i32> = ingredients::Entity::find()
            .filter(ingredients::Column::Id.is_in(ids.iter().copied()))
            .select_only()
            .column(ingredients::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .context("find existing ingredient ids")?;
        Ok(found)
    }

    async fn count(&self) -> Result<u64, RecipesServiceError> {
        let count = ingredients::Entity::find()
            .count(&self.db)
            .await
            .context("count ingredients")?;
        Ok(count)
    }

    async fn bulk_insert(&self, rows: &[(String, String)]) -> Result<u64, RecipesServiceError> {
        let models = rows.iter().map(|(name, unit)| ingredients::ActiveModel {
            id: NotSet,
            name: Set(name.clone()),
            measurement_unit: Set(unit.clone()),
        });
        let written = ingredients::Entity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .context("bulk insert ingredients")?;
        Ok(written)
    }
}

fn ingredient_from_model(model: ingredients::Model) -> Ingredient {
    Ingredient {
        id: model.id,
        name: model.name,
        measurement_unit: model.measurement_unit,
    }
}

// ── Recipe repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRecipeRepository {
    pub db: DatabaseConnection,
}

impl RecipeRepository for DbRecipeRepository {
    async fn list(
        &self,
        query: &RecipeQuery,
        page: PageRequest,
    ) -> Result<Vec<Recipe>, RecipesServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let mut select = recipes::Entity::find();

        if let Some(author_id) = query.author {
            select = select.filter(recipes::Column::AuthorId.eq(author_id));
        }
        if !query.tag_slugs.is_empty() {
            let tagged = Query::select()
                .column((recipe_tags::Entity, recipe_tags::Column::RecipeId))
                .from(recipe_tags::Entity)
                .inner_join(
                    tags::Entity,
                    Expr::col((tags::Entity, tags::Column::Id))
                        .equals((recipe_tags::Entity, recipe_tags::Column::TagId)),
                )
                .and_where(
                    Expr::col((tags::Entity, tags::Column::Slug))
                        .is_in(query.tag_slugs.iter().cloned()),
                )
                .to_owned();
            select = select.filter(recipes::Column::Id.in_subquery(tagged));
        }
        if let Some((user_id, wanted)) = query.favorited_by {
            let favorited = Query::select()
                .column(favorites::Column::RecipeId)
                .from(favorites::Entity)
                .and_where(Expr::col(favorites::Column::UserId).eq(user_id))
                .to_owned();
            select = if wanted {
                select.filter(recipes::Column::Id.in_subquery(favorited))
            } else {
                select.filter(Expr::col(recipes::Column::Id).not_in_subquery(favorited))
            };
        }
        if let Some((user_id, wanted)) = query.in_cart_of {
            let in_cart = Query::select()
                .column(shopping_cart_entries::Column::RecipeId)
                .from(shopping_cart_entries::Entity)
                .and_where(Expr::col(shopping_cart_entries::Column::UserId).eq(user_id))
                .to_owned();
            select = if wanted {
                select.filter(recipes::Column::Id.in_subquery(in_cart))
            } else {
                select.filter(Expr::col(recipes::Column::Id).not_in_subquery(in_cart))
            };
        }

        let models = select
            .order_by_desc(recipes::Column::PublishedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list recipes")?;
        Ok(models.into_iter().map(recipe_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Recipe>, RecipesServiceError> {
        let model = recipes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find recipe by id")?;
        Ok(model.map(recipe_from_model))
    }

    async fn exists_by_name_and_author(
        &self,
        name: &str,
        author_id: Uuid,
    ) -> Result<bool, RecipesServiceError> {
        let count = recipes::Entity::find()
            .filter(recipes::Column::Name.eq(name))
            .filter(recipes::Column::AuthorId.eq(author_id))
            .count(&self.db)
            .await
            .context("count recipes by name and author")?;
        Ok(count > 0)
    }

    async fn create(
        &self,
        recipe: &NewRecipe,
        ingredients: &[IngredientSpec],
        tag_ids: &[i32],
    ) -> Result<Recipe, RecipesServiceError> {
        let model = self
            .db
            .transaction::<_, recipes::Model, sea_orm::DbErr>(|txn| {
                let recipe = recipe.clone();
                let ingredients = ingredients.to_vec();
                let tag_ids = tag_ids.to_vec();
                Box::pin(async move {
                    let model = recipes::ActiveModel {
                        id: NotSet,
                        name: Set(recipe.name),
                        text: Set(recipe.text),
                        cooking_time: Set(recipe.cooking_time),
                        image: Set(recipe.image),
                        author_id: Set(recipe.author_id),
                        published_at: Set(Utc::now()),
                    }
                    .insert(txn)
                    .await?;

                    insert_associations(txn, model.id, &ingredients, &tag_ids).await?;
                    Ok(model)
                })
            })
            .await
            .context("create recipe")?;
        Ok(recipe_from_model(model))
    }

    async fn replace(
        &self,
        recipe_id: i32,
        fields: &RecipeUpdate,
        ingredients: &[IngredientSpec],
        tag_ids: &[i32],
    ) -> Result<(), RecipesServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let fields = fields.clone();
                let ingredients = ingredients.to_vec();
                let tag_ids = tag_ids.to_vec();
                Box::pin(async move {
                    recipes::ActiveModel {
                        id: Set(recipe_id),
                        name: Set(fields.name),
                        text: Set(fields.text),
                        cooking_time: Set(fields.cooking_time),
                        image: Set(fields.image),
                        ..Default::default()
                    }
                    .update(txn)
                    .await?;

                    recipe_ingredients::Entity::delete_many()
                        .filter(recipe_ingredients::Column::RecipeId.eq(recipe_id))
                        .exec(txn)
                        .await?;
                    recipe_tags::Entity::delete_many()
                        .filter(recipe_tags::Column::RecipeId.eq(recipe_id))
                        .exec(txn)
                        .await?;

                    insert_associations(txn, recipe_id, &ingredients, &tag_ids).await?;
                    Ok(())
                })
            })
            .await
            .context("replace recipe")?;
        Ok(())
    }

    async fn delete(&self, recipe_id: i32) -> Result<bool, RecipesServiceError> {
        let result = recipes::Entity::delete_many()
            .filter(recipes::Column::Id.eq(recipe_id))
            .exec(&self.db)
            .await
            .context("delete recipe")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_by_author(
        &self,
        author_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<Recipe>, RecipesServiceError> {
        let mut select = recipes::Entity::find()
            .filter(recipes::Column::AuthorId.eq(author_id))
            .order_by_desc(recipes::Column::PublishedAt);
        if let Some(limit) = limit {
            select = select.limit(limit);
        }
        let models = select
            .all(&self.db)
            .await
            .context("list recipes by author")?;
        Ok(models.into_iter().map(recipe_from_model).collect())
    }

    async fn count_by_author(&self, author_id: Uuid) -> Result<u64, RecipesServiceError> {
        let count = recipes::Entity::find()
            .filter(recipes::Column::AuthorId.eq(author_id))
            .count(&self.db)
            .await
            .context("count recipes by author")?;
        Ok(count)
    }

    async fn ingredients_of(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<(i32, IngredientAmount)>, RecipesServiceError> {
        let rows = recipe_ingredients::Entity::find()
            .filter(recipe_ingredients::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .find_also_related(ingredients::Entity)
            .all(&self.db)
            .await
            .context("list recipe ingredients")?;
        Ok(rows
            .into_iter()
            .filter_map(|(row, ingredient)| {
                ingredient.map(|i| {
                    (
                        row.recipe_id,
                        IngredientAmount {
                            id: i.id,
                            name: i.name,
                            measurement_unit: i.measurement_unit,
                            amount: row.amount,
                        },
                    )
                })
            })
            .collect())
    }

    async fn tags_of(&self, recipe_ids: &[i32]) -> Result<Vec<(i32, Tag)>, RecipesServiceError> {
        let rows = recipe_tags::Entity::find()
            .filter(recipe_tags::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .find_also_related(tags::Entity)
            .all(&self.db)
            .await
            .context("list recipe tags")?;
        Ok(rows
            .into_iter()
            .filter_map(|(row, tag)| tag.map(|t| (row.recipe_id, tag_from_model(t))))
            .collect())
    }
}

async fn insert_associations(
    txn: &sea_orm::DatabaseTransaction,
    recipe_id: i32,
    ingredients: &[IngredientSpec],
    tag_ids: &[i32],
) -> Result<(), sea_orm::DbErr> {
    let ingredient_rows = ingredients
        .iter()
        .map(|spec| recipe_ingredients::ActiveModel {
            recipe_id: Set(recipe_id),
            ingredient_id: Set(spec.id),
            amount: Set(spec.amount),
        });
    recipe_ingredients::Entity::insert_many(ingredient_rows)
        .exec_without_returning(txn)
        .await?;

    let tag_rows = tag_ids.iter().map(|tag_id| recipe_tags::ActiveModel {
        recipe_id: Set(recipe_id),
        tag_id: Set(*tag_id),
    });
    recipe_tags::Entity::insert_many(tag_rows)
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

fn recipe_from_model(model: recipes::Model) -> Recipe {
    Recipe {
        id: model.id,
        name: model.name,
        text: model.text,
        cooking_time: model.cooking_time,
        image: model.image,
        author_id: model.author_id,
        published_at: model.published_at,
    }
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn insert_if_absent(
        &self,
        user_id: Uuid,
        recipe_id: i32,
    ) -> Result<bool, RecipesServiceError> {
        let row = favorites::ActiveModel {
            user_id: Set(user_id),
            recipe_id: Set(recipe_id),
            created_at: Set(Utc::now()),
        };
        // DO NOTHING on the composite key makes concurrent duplicate adds
        // land as "already exists".
        let inserted = favorites::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([favorites::Column::UserId, favorites::Column::RecipeId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert favorite")?;
        Ok(inserted > 0)
    }

    async fn delete(&self, user_id: Uuid, recipe_id: i32) -> Result<bool, RecipesServiceError> {
        let result = favorites::Entity::delete_many()
            .filter(favorites::Column::UserId.eq(user_id))
            .filter(favorites::Column::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .context("delete favorite")?;
        Ok(result.rows_affected > 0)
    }

    async fn filter_favorited(
        &self,
        user_id: Uuid,
        recipe_ids: &[i32],
    ) -> Result<Vec<i32>, RecipesServiceError> {
        let found: Vec<i32> = favorites::Entity::find()
            .filter(favorites::Column::UserId.eq(user_id))
            .filter(favorites::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .select_only()
            .column(favorites::Column::RecipeId)
            .into_tuple()
            .all(&self.db)
            .await
            .context("filter favorited recipes")?;
        Ok(found)
    }
}

// ── Shopping cart repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbShoppingCartRepository {
    pub db: DatabaseConnection,
}

impl ShoppingCartRepository for DbShoppingCartRepository {
    async fn insert_if_absent(
        &self,
        user_id: Uuid,
        recipe_id: i32,
    ) -> Result<bool, RecipesServiceError> {
        let row = shopping_cart_entries::ActiveModel {
            user_id: Set(user_id),
            recipe_id: Set(recipe_id),
            created_at: Set(Utc::now()),
        };
        let inserted = shopping_cart_entries::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    shopping_cart_entries::Column::UserId,
                    shopping_cart_entries::Column::RecipeId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert shopping cart entry")?;
        Ok(inserted > 0)
    }

    async fn delete(&self, user_id: Uuid, recipe_id: i32) -> Result<bool, RecipesServiceError> {
        let result = shopping_cart_entries::Entity::delete_many()
            .filter(shopping_cart_entries::Column::UserId.eq(user_id))
            .filter(shopping_cart_entries::Column::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .context("delete shopping cart entry")?;
        Ok(result.rows_affected > 0)
    }

    async fn filter_in_cart(
        &self,
        user_id: Uuid,
        recipe_ids: &[i32],
    ) -> Result<Vec<i32>, RecipesServiceError> {
        let found: Vec<i32> = shopping_cart_entries::Entity::find()
            .filter(shopping_cart_entries::Column::UserId.eq(user_id))
            .filter(shopping_cart_entries::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .select_only()
            .column(shopping_cart_entries::Column::RecipeId)
            .into_tuple()
            .all(&self.db)
            .await
            .context("filter cart recipes")?;
        Ok(found)
    }

    async fn cart_ingredient_rows(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<CartIngredientRow>, RecipesServiceError> {
        use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

        #[derive(Debug, FromQueryResult)]
        struct Row {
            name: String,
            measurement_unit: String,
            amount: i32,
        }

        let sql = r#"
            SELECT i.name AS name, i.measurement_unit AS measurement_unit, ri.amount AS amount
            FROM shopping_cart_entries sce
            JOIN recipe_ingredients ri ON ri.recipe_id = sce.recipe_id
            JOIN ingredients i ON i.id = ri.ingredient_id
            WHERE sce.user_id = $1
        "#;

        let rows = Row::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [user_id.into()],
        ))
        .all(&self.db)
        .await
        .context("list cart ingredient rows")?;

        Ok(rows
            .into_iter()
            .map(|row| CartIngredientRow {
                name: row.name,
                measurement_unit: row.measurement_unit,
                amount: row.amount,
            })
            .collect())
    }
}

// ── Subscription repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSubscriptionRepository {
    pub db: DatabaseConnection,
}

impl SubscriptionRepository for DbSubscriptionRepository {
    async fn insert_if_absent(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, RecipesServiceError> {
        let row = subscriptions::ActiveModel {
            subscriber_id: Set(subscriber_id),
            author_id: Set(author_id),
            created_at: Set(Utc::now()),
        };
        let inserted = subscriptions::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    subscriptions::Column::SubscriberId,
                    subscriptions::Column::AuthorId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert subscription")?;
        Ok(inserted > 0)
    }

    async fn delete(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, RecipesServiceError> {
        let result = subscriptions::Entity::delete_many()
            .filter(subscriptions::Column::SubscriberId.eq(subscriber_id))
            .filter(subscriptions::Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .context("delete subscription")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_authors(
        &self,
        subscriber_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Uuid>, RecipesServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let found: Vec<Uuid> = subscriptions::Entity::find()
            .filter(subscriptions::Column::SubscriberId.eq(subscriber_id))
            .order_by_desc(subscriptions::Column::CreatedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .select_only()
            .column(subscriptions::Column::AuthorId)
            .into_tuple()
            .all(&self.db)
            .await
            .context("list subscribed authors")?;
        Ok(found)
    }

    async fn filter_subscribed(
        &self,
        subscriber_id: Uuid,
        author_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, RecipesServiceError> {
        let found: Vec<Uuid> = subscriptions::Entity::find()
            .filter(subscriptions::Column::SubscriberId.eq(subscriber_id))
            .filter(subscriptions::Column::AuthorId.is_in(author_ids.iter().copied()))
            .select_only()
            .column(subscriptions::Column::AuthorId)
            .into_tuple()
            .all(&self.db)
            .await
            .context("filter subscribed authors")?;
        Ok(found)
    }
}
