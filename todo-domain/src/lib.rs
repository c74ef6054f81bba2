//! Todo ドメインモデル
//!
//! レコード（[`Todo`]）とインメモリストア（[`TodoStore`]）のみを提供します。
//! HTTP 層の型には依存しません。永続化は行わず、プロセス再起動で全件消えます。

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Todo レコード
///
/// `id` はストアが採番し、作成後は不変。`createdAt`/`updatedAt` は
/// 作成時刻（更新操作はスコープ外のため常に同値）。
/// `expiresAt` はクライアント指定値をそのまま保持するだけで、
/// サーバ側で設定・参照することはありません。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub title: String,
    pub description: String,
    pub is_complete: bool,
    pub id: u64,
}

/// 作成リクエストのペイロード
///
/// 欠けたフィールドは既定値で補います。`is_complete` は受理するが無視され、
/// 保存時は必ず `false` になります（クライアントによる完了状態の偽装防止）。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub is_complete: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

/// インメモリの Todo ストア
///
/// コレクションと採番カウンタを単一の Mutex で保護します。
/// 作成（採番 + 追加）は 1 回のロック取得の中で行われるため、
/// ID が予約済みで未追加のレコードを `list` が観測することはありません。
#[derive(Debug, Default)]
pub struct TodoStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    todos: Vec<Todo>,
    current_id: u64,
}

impl StoreInner {
    /// 次の ID を採番します。オーバーフローは不変条件違反として panic します
    /// （黙って巻き戻すより即死のほうがまし）。
    fn next_id(&mut self) -> u64 {
        self.current_id = self
            .current_id
            .checked_add(1)
            .expect("todo id counter overflowed");
        self.current_id
    }

    /// レコードを末尾に追加します。既存要素と順序には触れません。
    fn append(&mut self, todo: Todo) {
        self.todos.push(todo);
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// レコードを 1 件作成します。
    ///
    /// 採番・フィールド設定・追加を同一ロック下で行います。
    /// `created_at`/`updated_at` には同じ時刻を設定し、
    /// `is_complete` は入力に関わらず `false` に強制します。
    pub fn create(&self, input: NewTodo) -> Todo {
        let now = Utc::now();
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        let todo = Todo {
            created_at: now,
            updated_at: now,
            expires_at: input.expires_at,
            title: input.title,
            description: input.description,
            is_complete: false,
            id,
        };
        inner.append(todo.clone());
        todo
    }

    /// 全レコードのスナップショットを挿入順で返します。
    pub fn list(&self) -> Vec<Todo> {
        self.inner.lock().unwrap().todos.clone()
    }

    /// ID で 1 件取得します（線形走査）。
    pub fn get_by_id(&self, id: u64) -> Option<Todo> {
        self.inner
            .lock()
            .unwrap()
            .todos
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
    }

    /// 現在のレコード件数
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
