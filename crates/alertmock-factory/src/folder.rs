//! Folder factory.

use alertmock_dto::Folder;

use crate::sequence::Sequence;

/// Field overrides for [`FolderFactory`].
#[derive(Debug, Clone, Default)]
pub struct FolderOverrides {
    /// Overrides the numeric folder id.
    pub id: Option<i64>,
    /// Overrides the folder uid.
    pub uid: Option<String>,
    /// Overrides the folder title.
    pub title: Option<String>,
    /// Overrides the folder version.
    pub version: Option<u32>,
    /// Overrides the folder url.
    pub url: Option<String>,
    /// Overrides all four permission flags at once.
    pub permissions: Option<FolderPermissions>,
    /// Overrides the access-control-list flag.
    pub has_acl: Option<bool>,
    /// Overrides the creation timestamp.
    pub created: Option<String>,
    /// Overrides the creating user.
    pub created_by: Option<String>,
    /// Overrides the last update timestamp.
    pub updated: Option<String>,
    /// Overrides the last updating user.
    pub updated_by: Option<String>,
}

/// The caller's permissions on a built folder.
#[derive(Debug, Clone, Copy)]
pub struct FolderPermissions {
    /// Can administer the folder.
    pub admin: bool,
    /// Can delete the folder.
    pub delete: bool,
    /// Can edit the folder.
    pub edit: bool,
    /// Can save into the folder.
    pub save: bool,
}

impl FolderPermissions {
    /// All permissions granted.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            admin: true,
            delete: true,
            edit: true,
            save: true,
        }
    }

    /// View-only: no permission granted.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            admin: false,
            delete: false,
            edit: false,
            save: false,
        }
    }
}

impl Default for FolderPermissions {
    fn default() -> Self {
        Self::all()
    }
}

impl FolderOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the numeric folder id.
    #[must_use]
    pub const fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the folder uid.
    #[must_use]
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Sets the folder title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the folder version.
    #[must_use]
    pub const fn version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Sets the folder url.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the permission flags.
    #[must_use]
    pub const fn permissions(mut self, permissions: FolderPermissions) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Sets the access-control-list flag.
    #[must_use]
    pub const fn has_acl(mut self, has_acl: bool) -> Self {
        self.has_acl = Some(has_acl);
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    /// Sets the creating user.
    #[must_use]
    pub fn created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
        self
    }

    /// Sets the last update timestamp.
    #[must_use]
    pub fn updated(mut self, updated: impl Into<String>) -> Self {
        self.updated = Some(updated.into());
        self
    }

    /// Sets the last updating user.
    #[must_use]
    pub fn updated_by(mut self, updated_by: impl Into<String>) -> Self {
        self.updated_by = Some(updated_by.into());
        self
    }
}

/// Builds folders titled `Mock Folder {seq}`.
///
/// Folder uids come from an independent counter so they stay unique even
/// when the main sequence is rewound.
#[derive(Debug, Clone, Default)]
pub struct FolderFactory {
    seq: Sequence,
    uid_seq: Sequence,
}

impl FolderFactory {
    /// Creates a factory with fresh sequence and uid counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a folder with default fields.
    pub fn build(&self) -> Folder {
        self.build_with(FolderOverrides::default())
    }

    /// Builds a folder, applying the given overrides over the defaults.
    pub fn build_with(&self, overrides: FolderOverrides) -> Folder {
        let seq = self.seq.next();
        let permissions = overrides.permissions.unwrap_or_default();

        Folder {
            id: overrides
                .id
                .unwrap_or_else(|| i64::try_from(seq).unwrap_or(i64::MAX)),
            uid: overrides
                .uid
                .unwrap_or_else(|| format!("mock-folder-uid-{}", self.uid_seq.next())),
            title: overrides
                .title
                .unwrap_or_else(|| format!("Mock Folder {seq}")),
            version: overrides.version.unwrap_or(1),
            url: overrides.url.unwrap_or_default(),
            can_admin: permissions.admin,
            can_delete: permissions.delete,
            can_edit: permissions.edit,
            can_save: permissions.save,
            has_acl: overrides.has_acl.unwrap_or(false),
            created: overrides.created.unwrap_or_default(),
            created_by: overrides.created_by.unwrap_or_default(),
            updated: overrides.updated.unwrap_or_default(),
            updated_by: overrides.updated_by.unwrap_or_default(),
        }
    }

    /// Builds `count` default folders.
    pub fn build_list(&self, count: usize) -> Vec<Folder> {
        (0..count).map(|_| self.build()).collect()
    }

    /// Resets the main sequence; the uid counter keeps advancing.
    pub fn rewind(&self) {
        self.seq.rewind();
    }
}
